//! Per-step update rules for each discretization scheme.
//!
//! Every scheme advances one radial step: given the completed azimuthal row
//! at radial index i it produces the row at the next index in marching
//! order. All updates operate in the logarithmic flux form of the governing
//! equation, with face fluxes `f(v) = -omega * ln(v)` (see [`crate::flux`]).
//!
//! Azimuthal indices wrap modulo nphi over the distinct cells; the duplicate
//! trailing column of the previous row is never read, and the integrator
//! restores it on the new row after the sweep.

use crate::flux::{limit, log_flux, smoothness_ratio, LimiterVariant};

use super::cfl::{courant_number, CflDiagnostics};
use super::error::PropagationError;

/// Discretization scheme for one radial marching step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemeVariant {
    /// First-order upwind in conservative log-flux form. The most diffusive
    /// scheme, and the low-order reference inside the hybrid variants.
    UpwindFirst,
    /// MacCormack predictor/corrector.
    MacCormack,
    /// Lax-Wendroff with half-step face reconstruction.
    LaxWendroff,
    /// Lax-Friedrichs; the most dissipative of the centered schemes.
    LaxFriedrichs,
    /// First-order upwind blended with a MacCormack high-order flux through
    /// a flux limiter (TVD-style).
    UpwindMacCormack,
    /// First-order upwind blended with a Lax-Wendroff high-order flux
    /// through a flux limiter (TVD-style). The production default.
    UpwindLaxWendroff,
}

impl SchemeVariant {
    /// Whether the variant has a backward-marching update rule.
    pub fn supports_backward(self) -> bool {
        matches!(self, Self::UpwindFirst | Self::UpwindLaxWendroff)
    }
}

/// Advance one radial step of a forward (inner -> outer) march.
///
/// `prev` is the completed row at the current radial index (length nphi + 1,
/// duplicate column included); `next` receives the new row. Cells
/// 0..nphi are written here; the duplicate column is left to the caller.
///
/// Courant numbers are recorded in `diag`; violations do not stop the march
/// and the update rule is applied unmodified.
#[allow(clippy::too_many_arguments)]
pub fn advance_row_forward(
    prev: &[f64],
    next: &mut [f64],
    step: usize,
    dr: f64,
    dp: &[f64],
    omega: f64,
    variant: SchemeVariant,
    limiter: LimiterVariant,
    diag: &mut CflDiagnostics,
) {
    let nphi = dp.len();
    for j in 0..nphi {
        let c = courant_number(omega, dr, dp[j], prev[j]);
        diag.observe(step, j, c, dr - dp[j] * prev[j] / omega);
        next[j] = update_cell_forward(prev, j, nphi, dr, dp[j], omega, variant, limiter);
    }
}

/// Parallel mirror of [`advance_row_forward`].
///
/// The azimuthal update is data-parallel: each cell reads only the previous
/// row. Courant bookkeeping stays sequential; it is cheap next to the
/// update itself.
#[cfg(feature = "parallel")]
#[allow(clippy::too_many_arguments)]
pub fn advance_row_forward_parallel(
    prev: &[f64],
    next: &mut [f64],
    step: usize,
    dr: f64,
    dp: &[f64],
    omega: f64,
    variant: SchemeVariant,
    limiter: LimiterVariant,
    diag: &mut CflDiagnostics,
) {
    use rayon::prelude::*;

    let nphi = dp.len();
    next[..nphi]
        .par_iter_mut()
        .enumerate()
        .for_each(|(j, out)| {
            *out = update_cell_forward(prev, j, nphi, dr, dp[j], omega, variant, limiter);
        });
    for j in 0..nphi {
        let c = courant_number(omega, dr, dp[j], prev[j]);
        diag.observe(step, j, c, dr - dp[j] * prev[j] / omega);
    }
}

/// Single-cell forward update.
#[allow(clippy::too_many_arguments)]
#[inline]
fn update_cell_forward(
    prev: &[f64],
    j: usize,
    nphi: usize,
    dr: f64,
    dp: f64,
    omega: f64,
    variant: SchemeVariant,
    limiter: LimiterVariant,
) -> f64 {
    let jm = if j == 0 { nphi - 1 } else { j - 1 };
    let jp = if j + 1 == nphi { 0 } else { j + 1 };
    let v_m = prev[jm];
    let v_c = prev[j];
    let v_p = prev[jp];
    let nu = omega * dr / dp;

    match variant {
        SchemeVariant::UpwindFirst => {
            v_c - (dr / dp) * (log_flux(omega, v_p) - log_flux(omega, v_c))
        }
        SchemeVariant::MacCormack => {
            // Predictor in log space, then average-and-correct.
            let v_star_c = v_c + nu * (v_p.ln() - v_c.ln());
            let v_star_m = v_m + nu * (v_c.ln() - v_m.ln());
            0.5 * (v_c + v_star_c) + 0.5 * nu * (v_star_c.ln() - v_star_m.ln())
        }
        SchemeVariant::LaxWendroff => {
            // Half-step face values at j + 1/2 and j - 1/2.
            let v_half_p = 0.5 * (v_p + v_c) + 0.5 * nu * (v_p.ln() - v_c.ln());
            let v_half_m = 0.5 * (v_c + v_m) + 0.5 * nu * (v_c.ln() - v_m.ln());
            v_c + nu * (v_half_p.ln() - v_half_m.ln())
        }
        SchemeVariant::LaxFriedrichs => {
            0.5 * (v_m + v_p) + 0.5 * nu * (v_p.ln() - v_m.ln())
        }
        SchemeVariant::UpwindMacCormack | SchemeVariant::UpwindLaxWendroff => {
            // Low-order face fluxes at j + 1/2 and j - 1/2.
            let f_low_p = log_flux(omega, v_p);
            let f_low_m = log_flux(omega, v_c);

            let (f_high_p, f_high_m) = if variant == SchemeVariant::UpwindMacCormack {
                let v_star_c = v_c + nu * (v_p.ln() - v_c.ln());
                let v_star_m = v_m + nu * (v_c.ln() - v_m.ln());
                (
                    0.5 * (f_low_p + log_flux(omega, v_star_c)),
                    0.5 * (f_low_m + log_flux(omega, v_star_m)),
                )
            } else {
                let v_half_p = 0.5 * (v_p + v_c) + 0.5 * nu * (v_p.ln() - v_c.ln());
                let v_half_m = 0.5 * (v_c + v_m) + 0.5 * nu * (v_c.ln() - v_m.ln());
                (log_flux(omega, v_half_p), log_flux(omega, v_half_m))
            };

            let theta = smoothness_ratio(v_m, v_c, v_p);
            let w = limit(theta, limiter);
            let f_p = f_low_p + w * (f_high_p - f_low_p);
            let f_m = f_low_m + w * (f_high_m - f_low_m);
            v_c - (dr / dp) * (f_p - f_m)
        }
    }
}

/// Advance one radial step of a backward (outer -> inner) march.
///
/// `prev` is the completed row nearer the outer boundary; `next` receives
/// the row one step sunward. The quasi-linear first-order term uses the
/// reversed one-sided difference `(v[j-1] - v[j]) / v[j]`, mirroring the
/// forward convention; `UpwindLaxWendroff` adds a limiter-blended
/// Lax-Wendroff correction on top of it.
///
/// Fatal on CFL violation: returns
/// [`PropagationError::StabilityViolation`] and the partially written row
/// must be discarded. Variants without a backward rule return
/// [`PropagationError::UnsupportedScheme`].
#[allow(clippy::too_many_arguments)]
pub fn advance_row_backward(
    prev: &[f64],
    next: &mut [f64],
    step: usize,
    dr: f64,
    dp: &[f64],
    omega: f64,
    variant: SchemeVariant,
    limiter: LimiterVariant,
) -> Result<(), PropagationError> {
    if !variant.supports_backward() {
        return Err(PropagationError::UnsupportedScheme { scheme: variant });
    }

    let nphi = dp.len();
    for j in 0..nphi {
        let c = courant_number(omega, dr, dp[j], prev[j]);
        if c > 1.0 {
            return Err(PropagationError::StabilityViolation {
                step,
                cell: j,
                courant: c,
            });
        }

        let jm = if j == 0 { nphi - 1 } else { j - 1 };
        let jp = if j + 1 == nphi { 0 } else { j + 1 };
        let v_m = prev[jm];
        let v_c = prev[j];
        let v_p = prev[jp];
        let nu = omega * dr / dp[j];

        let low = v_c + nu * (v_m - v_c) / v_c;

        next[j] = match variant {
            SchemeVariant::UpwindFirst => low,
            SchemeVariant::UpwindLaxWendroff => {
                // Half-step faces with the log-differences mirrored for the
                // reversed marching direction.
                let v_half_p = 0.5 * (v_p + v_c + nu * (v_c.ln() - v_p.ln()));
                let v_half_m = 0.5 * (v_m + v_c + nu * (v_m.ln() - v_c.ln()));
                let high = v_c + nu * (v_half_m.ln() - v_half_p.ln());

                let theta = smoothness_ratio(v_m, v_c, v_p);
                let w = limit(theta, limiter);
                low + w * (high - low)
            }
            // Rejected by supports_backward above.
            _ => unreachable!(),
        };
    }
    Ok(())
}

//! Local Courant number evaluation and forward-march CFL diagnostics.
//!
//! The Courant number of azimuthal cell j at radial step i is
//!
//!   C = omega * dr[i] / (dp[j] * v[i][j])
//!
//! and explicit upwind-type updates are stable for C <= 1. The two marching
//! directions respond differently to a violation:
//!
//! - backward (outer -> inner): fatal; the march aborts with
//!   [`crate::solver::PropagationError::StabilityViolation`].
//! - forward (inner -> outer): diagnostic only; the violation is recorded
//!   here and the march continues with the unmodified update rule.
//!
//! The asymmetry is inherited from the reference HUX model and is an
//! intentional policy choice, not an oversight: the outward march tolerates
//! transient local violations for typical solar-wind profiles, while the
//! inward unwind does not. Do not unify the two policies.

/// Local Courant number `omega * dr / (dp * v)`.
#[inline]
pub fn courant_number(omega: f64, dr: f64, dp: f64, v: f64) -> f64 {
    omega * dr / (dp * v)
}

/// One recorded CFL violation from a forward march.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CflViolation {
    /// Marching step index at which the violating row was read.
    pub step: usize,
    /// Azimuthal cell index.
    pub cell: usize,
    /// The violating Courant number (> 1).
    pub courant: f64,
    /// Radial-spacing slack `dr - dp * v / omega` (km); positive when the
    /// bound is exceeded.
    pub slack: f64,
}

/// Collected CFL diagnostics for one forward march.
#[derive(Clone, Debug, Default)]
pub struct CflDiagnostics {
    /// Every recorded violation, in marching order.
    pub violations: Vec<CflViolation>,
    /// Largest Courant number observed anywhere on the grid.
    pub max_courant: f64,
}

impl CflDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the Courant number of one cell, keeping a violation entry when
    /// it exceeds 1.
    pub fn observe(&mut self, step: usize, cell: usize, courant: f64, slack: f64) {
        if courant > self.max_courant {
            self.max_courant = courant;
        }
        if courant > 1.0 {
            self.violations.push(CflViolation {
                step,
                cell,
                courant,
                slack,
            });
        }
    }

    /// True if any cell exceeded the Courant bound.
    pub fn any_violation(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Print a one-line stderr summary of the recorded violations.
    pub fn report(&self) {
        let Some(worst) = self
            .violations
            .iter()
            .max_by(|a, b| a.courant.total_cmp(&b.courant))
        else {
            return;
        };
        eprintln!(
            "CFL WARNING: {} cell(s) exceeded the Courant bound \
             (max C = {:.4} at step {}, cell {}); forward march continued",
            self.violations.len(),
            worst.courant,
            worst.step,
            worst.cell
        );
    }
}

//! Row-by-row marching across the radial grid.

use crate::flux::LimiterVariant;
use crate::mesh::MeshSpacing;
use crate::physics::{apply_boost_in_place, PhysicalParameters};

use super::cfl::CflDiagnostics;
use super::error::PropagationError;
use super::field::VelocityField;
use super::scheme::{advance_row_backward, advance_row_forward, SchemeVariant};

/// Marching direction across the radial grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Inner boundary -> outer boundary. The seed row is row 0 and the
    /// acceleration boost (if requested) is added to it before marching.
    Forward,
    /// Outer boundary -> inner boundary. The seed row is row nr and the
    /// boost is subtracted from the completed inner row afterwards.
    Backward,
}

/// Propagate a boundary velocity profile across the full radial grid.
///
/// `v_initial` (km/s, all entries positive) seeds row 0 for a forward march
/// or row nr for a backward march; it may carry nphi or nphi + 1 entries
/// (see [`VelocityField::set_row`]). The returned field has shape
/// (nr + 1) x (nphi + 1) with the duplicate wrap column equal to column 0
/// on every row.
///
/// A backward march fails with
/// [`PropagationError::StabilityViolation`] as soon as the CFL bound is
/// exceeded; a forward march completes regardless and prints a one-line
/// stderr summary of any violations.
#[allow(clippy::too_many_arguments)]
pub fn integrate(
    v_initial: &[f64],
    mesh: &MeshSpacing,
    params: &PhysicalParameters,
    variant: SchemeVariant,
    limiter: LimiterVariant,
    direction: Direction,
    apply_acceleration: bool,
) -> Result<VelocityField, PropagationError> {
    let (field, diag) = integrate_with_diagnostics(
        v_initial,
        mesh,
        params,
        variant,
        limiter,
        direction,
        apply_acceleration,
    )?;
    diag.report();
    Ok(field)
}

/// Like [`integrate`], but hands the forward-march CFL diagnostics back to
/// the caller instead of printing them.
#[allow(clippy::too_many_arguments)]
pub fn integrate_with_diagnostics(
    v_initial: &[f64],
    mesh: &MeshSpacing,
    params: &PhysicalParameters,
    variant: SchemeVariant,
    limiter: LimiterVariant,
    direction: Direction,
    apply_acceleration: bool,
) -> Result<(VelocityField, CflDiagnostics), PropagationError> {
    let nr = mesh.nr();
    let mut field = VelocityField::zeros(nr, mesh.nphi());
    let mut diag = CflDiagnostics::new();

    match direction {
        Direction::Forward => {
            field.set_row(0, v_initial);
            if apply_acceleration {
                apply_boost_in_place(field.row_mut(0), 1.0, params);
            }

            for i in 0..nr {
                let (prev, next) = field.row_pair_mut(i, i + 1);
                advance_row_forward(
                    prev,
                    next,
                    i,
                    mesh.dr()[i],
                    mesh.dp(),
                    params.omega_rot,
                    variant,
                    limiter,
                    &mut diag,
                );
                field.enforce_periodicity(i + 1);
            }
        }
        Direction::Backward => {
            if !variant.supports_backward() {
                return Err(PropagationError::UnsupportedScheme { scheme: variant });
            }
            field.set_row(nr, v_initial);

            // Rows are written outer-in so the inner-boundary row lands
            // last, right before the boost is unwound from it.
            for step in 0..nr {
                let read = nr - step;
                let write = read - 1;
                let (prev, next) = field.row_pair_mut(read, write);
                advance_row_backward(
                    prev,
                    next,
                    step,
                    mesh.dr()[step],
                    mesh.dp(),
                    params.omega_rot,
                    variant,
                    limiter,
                )?;
                field.enforce_periodicity(write);
            }

            if apply_acceleration {
                apply_boost_in_place(field.row_mut(0), -1.0, params);
            }
        }
    }

    Ok((field, diag))
}

//! Residual acceleration boost applied at the inner boundary.
//!
//! The marching schemes treat each stream as coasting at constant speed.
//! The residual acceleration the wind still experiences beyond the inner
//! boundary is folded into a single multiplicative boost
//!
//!   v_acc = alpha * v * (1 - exp(-r0 / rh))
//!
//! added to the seed row when a forward march leaves the inner boundary and
//! subtracted from the completed inner row when a backward march unwinds
//! back toward the Sun.

use super::PhysicalParameters;

/// Boost factor `1 + sign * alpha * (1 - exp(-r0 / rh))`.
#[inline]
fn boost_factor(sign: f64, params: &PhysicalParameters) -> f64 {
    1.0 + sign * params.alpha * (1.0 - (-params.r0 / params.rh).exp())
}

/// Return `row + sign * alpha * row * (1 - exp(-r0 / rh))`.
///
/// `sign` is +1.0 when seeding a forward march and -1.0 when finalizing a
/// backward march at the inner boundary.
pub fn apply_boost(row: &[f64], sign: f64, params: &PhysicalParameters) -> Vec<f64> {
    let factor = boost_factor(sign, params);
    row.iter().map(|&v| v * factor).collect()
}

/// In-place variant of [`apply_boost`].
pub fn apply_boost_in_place(row: &mut [f64], sign: f64, params: &PhysicalParameters) {
    let factor = boost_factor(sign, params);
    for v in row.iter_mut() {
        *v *= factor;
    }
}

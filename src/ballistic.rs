//! Ballistic longitude mapping.
//!
//! The zeroth-order alternative to the finite-difference march: assume each
//! solar-wind parcel keeps a constant radial speed, so a stream observed at
//! longitude phi with speed v maps across a radial distance dr to
//!
//!   phi' = phi - omega * dr / v   (mod 2π)
//!
//! There is no stability concern; the mapping is well-defined for any
//! nonzero speed.

use std::f64::consts::TAU;

/// Map each longitude across a radial distance `dr` (km) assuming constant
/// speed, wrapping the result into [0, 2π).
///
/// `v_initial` (km/s, nonzero) and `phi_grid` (radians) must have equal
/// length.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn map_longitude(v_initial: &[f64], dr: f64, phi_grid: &[f64], omega: f64) -> Vec<f64> {
    assert_eq!(
        v_initial.len(),
        phi_grid.len(),
        "Velocity and longitude grids must have equal length"
    );
    phi_grid
        .iter()
        .zip(v_initial)
        .map(|(&phi, &v)| (phi - omega * dr / v).rem_euclid(TAU))
        .collect()
}

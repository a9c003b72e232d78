//! Physical parameters and the empirical inner-boundary acceleration boost.

mod acceleration;

pub use acceleration::{apply_boost, apply_boost_in_place};

/// Solar radius in kilometers.
pub const SOLAR_RADIUS_KM: f64 = 695_700.0;

/// Physical constants for one propagation run.
///
/// Passed by reference into each call; there is no global state. The
/// defaults reproduce the reference HUX calibration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalParameters {
    /// Differential rotation angular rate (rad/s).
    pub omega_rot: f64,
    /// Acceleration boost coefficient (dimensionless).
    pub alpha: f64,
    /// Acceleration length scale (km).
    pub rh: f64,
    /// Inner-boundary reference radius (km).
    pub r0: f64,
}

impl Default for PhysicalParameters {
    /// Reference calibration: 25.38-day Carrington rotation period,
    /// alpha = 0.15, r_h = 50 R_s, r_0 = 30 R_s.
    fn default() -> Self {
        Self {
            omega_rot: std::f64::consts::TAU / (25.38 * 86_400.0),
            alpha: 0.15,
            rh: 50.0 * SOLAR_RADIUS_KM,
            r0: 30.0 * SOLAR_RADIUS_KM,
        }
    }
}

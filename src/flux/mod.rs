//! Numerical flux building blocks for the logarithmic-form update.
//!
//! The governing conservation law is written for log(v) rather than v, so
//! every scheme evaluates face fluxes as `f(v) = -omega * ln(v)`. Working in
//! log form keeps the marched speeds positive for physical profiles.

mod limiters;

pub use limiters::{limit, LimiterVariant};

/// Log-form face flux `f(v) = -omega * ln(v)`.
#[inline]
pub fn log_flux(omega: f64, v: f64) -> f64 {
    -omega * v.ln()
}

/// Smoothness ratio `theta = (v_c - v_m) / (v_p - v_c)`.
///
/// A flat region (`v_p == v_c`) maps to exactly 0, which degenerates any
/// limiter to the pure low-order blend instead of dividing by zero.
#[inline]
pub fn smoothness_ratio(v_m: f64, v_c: f64, v_p: f64) -> f64 {
    if v_p == v_c {
        0.0
    } else {
        (v_c - v_m) / (v_p - v_c)
    }
}

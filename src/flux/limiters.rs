//! Flux limiters for the hybrid upwind schemes.
//!
//! A limiter maps the local smoothness ratio theta to a blending weight:
//! 0 recovers the pure low-order (first-order upwind) flux, 1 or more favors
//! the high-order correction. Near extrema and discontinuities the weight
//! collapses toward 0 so the update stays total-variation diminishing.
//!
//! # References
//! - Sweby (1984), "High resolution schemes using flux limiters for
//!   hyperbolic conservation laws"

/// Flux-limiter family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimiterVariant {
    /// Smooth rational limiter: `(|theta| + theta) / (1 + |theta|)`.
    VanLeer,
    /// The most diffusive classical limiter: `max(0, min(1, theta))`.
    Minmod,
    /// The least diffusive second-order TVD limiter:
    /// `max(0, min(1, 2 theta), min(theta, 2))`.
    Superbee,
    /// Monotonized central: `max(0, min((1 + theta) / 2, 2, 2 theta))`.
    MonotonizedCentral,
}

/// Evaluate the limiter weight for smoothness ratio `theta`.
pub fn limit(theta: f64, variant: LimiterVariant) -> f64 {
    match variant {
        LimiterVariant::VanLeer => (theta.abs() + theta) / (1.0 + theta.abs()),
        LimiterVariant::Minmod => theta.min(1.0).max(0.0),
        LimiterVariant::Superbee => (2.0 * theta).min(1.0).max(theta.min(2.0)).max(0.0),
        LimiterVariant::MonotonizedCentral => {
            ((1.0 + theta) / 2.0).min(2.0).min(2.0 * theta).max(0.0)
        }
    }
}

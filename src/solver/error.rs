//! Error types for propagation runs.

use thiserror::Error;

use super::scheme::SchemeVariant;

/// Errors that can abort a propagation run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropagationError {
    /// The CFL bound was exceeded while marching backward toward the Sun.
    ///
    /// Backward marching treats a Courant number above 1 as fatal and
    /// discards the partially built field. A forward march only records the
    /// same condition as a diagnostic (see [`crate::solver::cfl`]).
    #[error(
        "CFL condition violated at radial step {step}, azimuthal cell {cell}: \
         Courant number {courant:.4} > 1"
    )]
    StabilityViolation {
        /// Marching step index at which the violating row was read.
        step: usize,
        /// Azimuthal cell index.
        cell: usize,
        /// The violating Courant number.
        courant: f64,
    },

    /// The selected scheme has no backward-marching update rule.
    #[error(
        "scheme {scheme:?} has no backward-marching update rule; \
         use UpwindFirst or UpwindLaxWendroff"
    )]
    UnsupportedScheme { scheme: SchemeVariant },
}

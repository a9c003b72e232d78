//! Finite-difference marching solver.
//!
//! # Submodules
//!
//! - [`field`]: the velocity field container filled row-by-row
//! - [`scheme`]: per-step update rules for each discretization scheme
//! - [`cfl`]: Courant number evaluation and forward-march diagnostics
//! - [`integrator`]: the forward/backward march across the radial grid
//! - [`error`]: error types

pub mod cfl;
pub mod error;
pub mod field;
pub mod integrator;
pub mod scheme;

pub use cfl::{courant_number, CflDiagnostics, CflViolation};
pub use error::PropagationError;
pub use field::VelocityField;
pub use integrator::{integrate, integrate_with_diagnostics, Direction};
pub use scheme::{advance_row_backward, advance_row_forward, SchemeVariant};

#[cfg(feature = "parallel")]
pub use scheme::advance_row_forward_parallel;

//! # hux-rs
//!
//! Heliospheric Upwind eXtrapolation (HUX): finite-difference propagation of
//! the solar-wind radial speed across an r/phi (heliocentric distance /
//! Carrington longitude) grid.
//!
//! The speed field obeys an inviscid-Burgers-type conservation law driven by
//! differential solar rotation; marching in radius replaces marching in
//! time. This crate provides the core building blocks:
//! - Marching schemes: first-order upwind, MacCormack, Lax-Wendroff,
//!   Lax-Friedrichs, and flux-limited hybrid upwind variants
//! - Flux limiters (van Leer, minmod, superbee, monotonized central)
//! - CFL checking with a direction-dependent violation policy
//! - Forward (inner -> outer) and backward (outer -> inner) marching with
//!   the empirical inner-boundary acceleration boost
//! - A closed-form ballistic longitude mapping as a sanity baseline
//!
//! # Example
//!
//! ```
//! use hux_rs::{
//!     integrate, Direction, LimiterVariant, MeshSpacing, PhysicalParameters,
//!     SchemeVariant, SOLAR_RADIUS_KM,
//! };
//! use std::f64::consts::TAU;
//!
//! let nphi = 128;
//! let mesh = MeshSpacing::uniform(
//!     30.0 * SOLAR_RADIUS_KM,
//!     215.0 * SOLAR_RADIUS_KM,
//!     400,
//!     nphi,
//! );
//! let v0: Vec<f64> = (0..nphi)
//!     .map(|j| 450.0 + 150.0 * (TAU * j as f64 / nphi as f64).sin())
//!     .collect();
//!
//! let field = integrate(
//!     &v0,
//!     &mesh,
//!     &PhysicalParameters::default(),
//!     SchemeVariant::UpwindLaxWendroff,
//!     LimiterVariant::VanLeer,
//!     Direction::Forward,
//!     true,
//! )
//! .unwrap();
//! assert_eq!(field.n_rows(), 401);
//! ```

pub mod ballistic;
pub mod flux;
pub mod mesh;
pub mod physics;
pub mod solver;

pub use ballistic::map_longitude;
pub use flux::{limit, log_flux, smoothness_ratio, LimiterVariant};
pub use mesh::MeshSpacing;
pub use physics::{apply_boost, apply_boost_in_place, PhysicalParameters, SOLAR_RADIUS_KM};
pub use solver::{
    advance_row_backward, advance_row_forward, courant_number, integrate,
    integrate_with_diagnostics, CflDiagnostics, CflViolation, Direction, PropagationError,
    SchemeVariant, VelocityField,
};

#[cfg(feature = "parallel")]
pub use solver::advance_row_forward_parallel;

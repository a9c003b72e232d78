//! Mesh spacing for the r/phi propagation grid.
//!
//! The grid is logically (nr + 1) radial rows by (nphi + 1) azimuthal
//! columns, where column nphi duplicates column 0 (periodic longitude).
//! The mesh itself stores only the spacings between grid points; grid
//! generation and physical placement are the caller's concern.

use std::f64::consts::TAU;

/// Radial and azimuthal mesh spacings for one propagation run.
///
/// `dr[i]` is the spacing (km) between radial rows i and i + 1, ordered in
/// marching order (inner-out for a forward march, outer-in for a backward
/// march). `dp[j]` is the spacing (radians) between longitude columns j and
/// j + 1. Over one full wrap the azimuthal spacings should sum to 2π; this
/// is not enforced here.
#[derive(Clone, Debug)]
pub struct MeshSpacing {
    dr: Vec<f64>,
    dp: Vec<f64>,
}

impl MeshSpacing {
    /// Create a mesh from explicit spacing vectors.
    ///
    /// # Panics
    ///
    /// Panics if either vector is empty or contains a non-positive spacing.
    pub fn new(dr: Vec<f64>, dp: Vec<f64>) -> Self {
        assert!(!dr.is_empty(), "Need at least one radial step");
        assert!(!dp.is_empty(), "Need at least one azimuthal step");
        assert!(
            dr.iter().all(|&d| d > 0.0),
            "Radial spacings must be strictly positive"
        );
        assert!(
            dp.iter().all(|&d| d > 0.0),
            "Azimuthal spacings must be strictly positive"
        );
        Self { dr, dp }
    }

    /// Uniform mesh: nr radial steps covering [r_min, r_max] (km) and nphi
    /// azimuthal steps covering one full 2π wrap.
    pub fn uniform(r_min: f64, r_max: f64, nr: usize, nphi: usize) -> Self {
        assert!(nr > 0, "Need at least one radial step");
        assert!(nphi > 0, "Need at least one azimuthal step");
        assert!(r_max > r_min, "r_max must be greater than r_min");

        let dr = (r_max - r_min) / nr as f64;
        let dp = TAU / nphi as f64;
        Self {
            dr: vec![dr; nr],
            dp: vec![dp; nphi],
        }
    }

    /// Number of radial steps (rows written by one march).
    pub fn nr(&self) -> usize {
        self.dr.len()
    }

    /// Number of distinct azimuthal cells; the duplicate wrap column is not
    /// counted.
    pub fn nphi(&self) -> usize {
        self.dp.len()
    }

    /// Radial spacings in marching order, length `nr`.
    pub fn dr(&self) -> &[f64] {
        &self.dr
    }

    /// Azimuthal spacings, length `nphi`.
    pub fn dp(&self) -> &[f64] {
        &self.dp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_mesh_spacings() {
        let mesh = MeshSpacing::uniform(30.0 * 695_700.0, 215.0 * 695_700.0, 100, 128);
        assert_eq!(mesh.nr(), 100);
        assert_eq!(mesh.nphi(), 128);

        let total_r: f64 = mesh.dr().iter().sum();
        assert!((total_r - 185.0 * 695_700.0).abs() < 1e-3);

        let total_p: f64 = mesh.dp().iter().sum();
        assert!((total_p - TAU).abs() < 1e-12);
    }

    #[test]
    fn test_explicit_spacings() {
        let mesh = MeshSpacing::new(vec![1.0, 2.0, 3.0], vec![0.5; 8]);
        assert_eq!(mesh.nr(), 3);
        assert_eq!(mesh.nphi(), 8);
        assert_eq!(mesh.dr()[1], 2.0);
    }

    #[test]
    #[should_panic(expected = "strictly positive")]
    fn test_rejects_non_positive_spacing() {
        MeshSpacing::new(vec![1.0, 0.0], vec![0.5]);
    }
}

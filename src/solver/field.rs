//! Velocity field container for one propagation run.

/// Radial solar-wind speed (km/s) on the (nr + 1) x (nphi + 1) r/phi grid.
///
/// Stored row-major. Column nphi duplicates column 0 on every populated row
/// (periodic longitude); the integrator restores this invariant after each
/// row is written.
#[derive(Clone, Debug, PartialEq)]
pub struct VelocityField {
    nr: usize,
    nphi: usize,
    data: Vec<f64>,
}

impl VelocityField {
    /// Zero-filled field for a mesh with `nr` radial and `nphi` azimuthal
    /// steps.
    pub fn zeros(nr: usize, nphi: usize) -> Self {
        Self {
            nr,
            nphi,
            data: vec![0.0; (nr + 1) * (nphi + 1)],
        }
    }

    /// Number of radial rows, nr + 1.
    pub fn n_rows(&self) -> usize {
        self.nr + 1
    }

    /// Number of azimuthal columns including the duplicate, nphi + 1.
    pub fn n_cols(&self) -> usize {
        self.nphi + 1
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i <= self.nr && j <= self.nphi);
        i * (self.nphi + 1) + j
    }

    /// Value at radial row i, azimuthal column j.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.idx(i, j)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let k = self.idx(i, j);
        self.data[k] = value;
    }

    /// Row i including the duplicate trailing column, length nphi + 1.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = self.idx(i, 0);
        &self.data[start..start + self.nphi + 1]
    }

    /// Mutable row i, length nphi + 1.
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let start = self.idx(i, 0);
        let end = start + self.nphi + 1;
        &mut self.data[start..end]
    }

    /// Seed row i from `values`.
    ///
    /// `values` may carry nphi entries (distinct cells only) or nphi + 1
    /// entries (duplicate column included); either way the duplicate column
    /// is rewritten from column 0 afterwards.
    ///
    /// # Panics
    ///
    /// Panics on any other length.
    pub fn set_row(&mut self, i: usize, values: &[f64]) {
        assert!(
            values.len() == self.nphi || values.len() == self.nphi + 1,
            "Row length {} does not match nphi = {} (+1 for the wrap column)",
            values.len(),
            self.nphi
        );
        let n = values.len();
        let start = self.idx(i, 0);
        self.data[start..start + n].copy_from_slice(values);
        self.enforce_periodicity(i);
    }

    /// Copy column 0 into the duplicate column nphi for row i.
    pub fn enforce_periodicity(&mut self, i: usize) {
        let v0 = self.get(i, 0);
        self.set(i, self.nphi, v0);
    }

    /// Borrow row `read` immutably and row `write` mutably at once.
    ///
    /// # Panics
    ///
    /// Panics if `read == write`.
    pub fn row_pair_mut(&mut self, read: usize, write: usize) -> (&[f64], &mut [f64]) {
        assert_ne!(read, write, "Cannot alias a row with itself");
        let cols = self.nphi + 1;
        if read < write {
            let (lo, hi) = self.data.split_at_mut(write * cols);
            (&lo[read * cols..read * cols + cols], &mut hi[..cols])
        } else {
            let (lo, hi) = self.data.split_at_mut(read * cols);
            (&hi[..cols], &mut lo[write * cols..write * cols + cols])
        }
    }

    /// Innermost radial profile (row 0).
    pub fn inner_row(&self) -> &[f64] {
        self.row(0)
    }

    /// Outermost radial profile (row nr).
    pub fn outer_row(&self) -> &[f64] {
        self.row(self.nr)
    }
}

//! # Dense Feature Matrix

use core::ops::Index;

/// A dense, row-major `f64` matrix.
///
/// Rows are sequences; columns are either token positions (ordinal)
/// or dictionary ids (presence, TF-IDF). Unfilled cells are `0.0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl FeatureMatrix {
    /// Create a zero-filled `rows x cols` matrix.
    pub fn zeros(
        rows: usize,
        cols: usize,
    ) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build a matrix from ragged rows, zero-padding each to `cols`.
    ///
    /// ## Arguments
    /// * `rows` - The row values; none may be longer than `cols`.
    /// * `cols` - The matrix width.
    ///
    /// ## Panics
    /// If any row is longer than `cols`.
    pub fn from_padded_rows<R>(
        rows: &[R],
        cols: usize,
    ) -> Self
    where
        R: AsRef<[f64]>,
    {
        let mut matrix = Self::zeros(rows.len(), cols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert!(
                row.len() <= cols,
                "row {idx} has {} values; matrix width is {cols}",
                row.len()
            );
            matrix.row_mut(idx)[..row.len()].copy_from_slice(row);
        }
        matrix
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// ``(rows, cols)``.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns true if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Get the value at ``(row, col)``, if in bounds.
    pub fn get(
        &self,
        row: usize,
        col: usize,
    ) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow row `idx`.
    ///
    /// ## Panics
    /// If `idx` is out of bounds.
    pub fn row(
        &self,
        idx: usize,
    ) -> &[f64] {
        assert!(idx < self.rows, "row {idx} out of bounds ({})", self.rows);
        &self.data[idx * self.cols..(idx + 1) * self.cols]
    }

    fn row_mut(
        &mut self,
        idx: usize,
    ) -> &mut [f64] {
        &mut self.data[idx * self.cols..(idx + 1) * self.cols]
    }

    /// Iterate over the rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(|idx| self.row(idx))
    }

    /// The row-major backing slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy out as nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }
}

impl Index<(usize, usize)> for FeatureMatrix {
    type Output = f64;

    fn index(
        &self,
        (row, col): (usize, usize),
    ) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds {:?}",
            self.shape()
        );
        &self.data[row * self.cols + col]
    }
}

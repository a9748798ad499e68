//! # Sparse Feature Matrix

use crate::output::FeatureMatrix;

/// A compressed sparse row (CSR) `f64` matrix.
///
/// Holds only the non-zero cells. Presence and TF-IDF rows are
/// dictionary-wide and mostly zero, so this is their compact shape.
///
/// Row `r` owns `col_indices[row_offsets[r]..row_offsets[r + 1]]` and the
/// matching `values`; column indices within a row are strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    cols: usize,
    row_offsets: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<f64>,
}

impl Default for SparseMatrix {
    fn default() -> Self {
        Self::empty(0, 0)
    }
}

impl SparseMatrix {
    /// Create an all-zero `rows x cols` matrix.
    pub fn empty(
        rows: usize,
        cols: usize,
    ) -> Self {
        Self {
            cols,
            row_offsets: vec![0; rows + 1],
            col_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Build a matrix from ragged rows, dropping zero cells.
    ///
    /// ## Arguments
    /// * `rows` - The row values; none may be longer than `cols`.
    /// * `cols` - The matrix width.
    ///
    /// ## Panics
    /// If any row is longer than `cols`.
    pub fn from_rows<R>(
        rows: &[R],
        cols: usize,
    ) -> Self
    where
        R: AsRef<[f64]>,
    {
        let mut row_offsets = Vec::with_capacity(rows.len() + 1);
        let mut col_indices = Vec::new();
        let mut values = Vec::new();

        row_offsets.push(0);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert!(
                row.len() <= cols,
                "row {idx} has {} values; matrix width is {cols}",
                row.len()
            );
            for (col, &value) in row.iter().enumerate() {
                if value != 0.0 {
                    col_indices.push(col);
                    values.push(value);
                }
            }
            row_offsets.push(values.len());
        }

        Self {
            cols,
            row_offsets,
            col_indices,
            values,
        }
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.row_offsets.len() - 1
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// ``(rows, cols)``.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols)
    }

    /// Returns true if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows() == 0
    }

    /// The number of stored (non-zero) cells.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Get the value at ``(row, col)``, if in bounds; absent cells are `0.0`.
    pub fn get(
        &self,
        row: usize,
        col: usize,
    ) -> Option<f64> {
        if row >= self.rows() || col >= self.cols {
            return None;
        }
        let (cols, values) = self.row(row);
        Some(match cols.binary_search(&col) {
            Ok(pos) => values[pos],
            Err(_) => 0.0,
        })
    }

    /// Borrow the stored column indices and values of row `idx`.
    ///
    /// ## Panics
    /// If `idx` is out of bounds.
    pub fn row(
        &self,
        idx: usize,
    ) -> (&[usize], &[f64]) {
        assert!(idx < self.rows(), "row {idx} out of bounds ({})", self.rows());
        let span = self.row_offsets[idx]..self.row_offsets[idx + 1];
        (&self.col_indices[span.clone()], &self.values[span])
    }

    /// Iterate over the stored cells as ``(row, col, value)`` triplets,
    /// row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.rows()).flat_map(move |row| {
            let (cols, values) = self.row(row);
            cols.iter()
                .zip(values)
                .map(move |(&col, &value)| (row, col, value))
        })
    }

    /// The CSR row offsets; `rows() + 1` entries.
    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    /// The CSR column indices, parallel to [`values`](Self::values).
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// The stored values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Expand to a dense [`FeatureMatrix`].
    pub fn to_dense(&self) -> FeatureMatrix {
        let rows: Vec<Vec<f64>> = (0..self.rows())
            .map(|idx| {
                let mut row = vec![0.0; self.cols];
                let (cols, values) = self.row(idx);
                for (&col, &value) in cols.iter().zip(values) {
                    row[col] = value;
                }
                row
            })
            .collect();
        FeatureMatrix::from_padded_rows(&rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let rows = vec![vec![0.0, 2.0, 0.0], vec![], vec![1.5, 0.0, 3.0]];
        let matrix = SparseMatrix::from_rows(&rows, 3);

        assert_eq!(matrix.shape(), (3, 3));
        assert_eq!(matrix.nnz(), 3);
        assert_eq!(matrix.row_offsets(), &[0, 1, 1, 3]);
        assert_eq!(matrix.col_indices(), &[1, 0, 2]);
        assert_eq!(matrix.values(), &[2.0, 1.5, 3.0]);

        assert_eq!(matrix.row(1), (&[] as &[usize], &[] as &[f64]));
        assert_eq!(matrix.get(0, 1), Some(2.0));
        assert_eq!(matrix.get(0, 0), Some(0.0));
        assert_eq!(matrix.get(1, 2), Some(0.0));
        assert_eq!(matrix.get(0, 3), None);
        assert_eq!(matrix.get(3, 0), None);

        assert_eq!(
            matrix.iter().collect::<Vec<_>>(),
            vec![(0, 1, 2.0), (2, 0, 1.5), (2, 2, 3.0)]
        );
        assert_eq!(
            matrix.to_dense(),
            FeatureMatrix::from_padded_rows(&rows, 3)
        );
    }

    #[test]
    fn test_empty() {
        let matrix = SparseMatrix::default();
        assert!(matrix.is_empty());
        assert_eq!(matrix.shape(), (0, 0));
        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.iter().count(), 0);
        assert!(matrix.to_dense().is_empty());

        let matrix = SparseMatrix::empty(2, 4);
        assert_eq!(matrix.shape(), (2, 4));
        assert_eq!(matrix.get(1, 3), Some(0.0));
        assert_eq!(matrix.to_dense(), FeatureMatrix::zeros(2, 4));
    }

    #[test]
    #[should_panic]
    fn test_row_too_long() {
        SparseMatrix::from_rows(&[vec![1.0, 2.0]], 1);
    }
}

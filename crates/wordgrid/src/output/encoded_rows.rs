//! # Shape-Agnostic Encoded Rows

use crate::output::{FeatureMatrix, SparseMatrix};

/// Per-sequence values from one encoding pass, before shaping.
///
/// `width` is the dense column count: the longest row for ordinal
/// encodings, the dictionary size for vocabulary-width encodings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncodedRows {
    rows: Vec<Vec<f64>>,
    width: usize,
}

impl EncodedRows {
    /// Wrap `rows` with an explicit dense width.
    ///
    /// ## Panics
    /// If any row is longer than `width`.
    pub fn new(
        rows: Vec<Vec<f64>>,
        width: usize,
    ) -> Self {
        assert!(
            rows.iter().all(|row| row.len() <= width),
            "row longer than width {width}"
        );
        Self { rows, width }
    }

    /// Wrap `rows`, using the longest row as the dense width.
    pub fn from_ragged(rows: Vec<Vec<f64>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The dense column count.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Borrow the unpadded rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Shape as a zero-padded [`FeatureMatrix`].
    pub fn into_dense(self) -> FeatureMatrix {
        FeatureMatrix::from_padded_rows(&self.rows, self.width)
    }

    /// Shape as a CSR [`SparseMatrix`] of width [`width`](Self::width).
    pub fn into_sparse(self) -> SparseMatrix {
        SparseMatrix::from_rows(&self.rows, self.width)
    }

    /// Shape as unpadded rows.
    pub fn into_ragged(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

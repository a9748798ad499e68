//! # Encoder Output
//!
//! Every encoding pass produces [`EncodedRows`]; shaping into a dense
//! [`FeatureMatrix`], a CSR [`SparseMatrix`], or ragged ``Vec<Vec<f64>>``
//! is a separate final step.

mod encoded_rows;
mod feature_matrix;
mod sparse_matrix;

#[doc(inline)]
pub use encoded_rows::*;
#[doc(inline)]
pub use feature_matrix::*;
#[doc(inline)]
pub use sparse_matrix::*;

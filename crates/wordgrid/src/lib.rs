//! # `wordgrid` String Encoding
//!
//! Turn batches of raw text into numeric feature rows over a shared,
//! incrementally built dictionary.
//!
//! See:
//! * [`tokenizers`] to split text into tokens.
//! * [`dictionary`] for the ``{ token <-> id }`` dictionary.
//! * [`policies`] for the ordinal, presence, and TF-IDF encodings.
//! * [`encoding`] to encode batches.
//! * [`io`] to save and restore encoder state.
//!
//! ## Encoding A Batch
//!
//! ```rust
//! use wordgrid::{
//!     encoding::StringEncoder,
//!     policies::EncodingPolicy,
//!     tokenizers::CharExtract,
//! };
//!
//! type T = u32;
//! let mut encoder = StringEncoder::<T>::new(EncodingPolicy::ordinal());
//!
//! let matrix = encoder
//!     .encode_dense(&["GACCA", "ABCABCD", "GAB"], &CharExtract)
//!     .unwrap();
//!
//! assert_eq!(matrix.shape(), (3, 7));
//! assert_eq!(matrix.row(0), &[1.0, 2.0, 3.0, 3.0, 2.0, 0.0, 0.0]);
//! assert_eq!(encoder.dictionary().value("B"), 4);
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod dictionary;
pub mod encoding;
pub mod errors;
pub mod io;
pub mod output;
pub mod policies;
pub mod tokenizers;
pub mod types;

#[doc(inline)]
pub use encoding::{EncoderPhase, StringEncoder, StringEncoderOptions};
#[doc(inline)]
pub use errors::{WGResult, WordgridError};
#[doc(inline)]
pub use output::{FeatureMatrix, SparseMatrix};

//! # Batch Encoding
//!
//! [`StringEncoder`] ties a [`StringTokenizer`](crate::tokenizers::StringTokenizer),
//! a shared [`TokenDictionary`](crate::dictionary::TokenDictionary) and an
//! [`EncodingPolicy`](crate::policies::EncodingPolicy) together.
//!
//! ## Example
//!
//! ```rust
//! use wordgrid::{
//!     encoding::StringEncoderOptions,
//!     policies::PolicyKind,
//!     tokenizers::CharExtract,
//! };
//!
//! let mut encoder = StringEncoderOptions::default()
//!     .with_policy(PolicyKind::Presence)
//!     .build::<u32>();
//!
//! let matrix = encoder.encode_dense(&["GACCA", "GAB"], &CharExtract).unwrap();
//! assert_eq!(matrix.to_rows(), vec![
//!     vec![1.0, 1.0, 1.0, 0.0],
//!     vec![1.0, 1.0, 0.0, 1.0],
//! ]);
//! ```

mod encoder_options;
mod string_encoder;

#[doc(inline)]
pub use encoder_options::*;
#[doc(inline)]
pub use string_encoder::*;

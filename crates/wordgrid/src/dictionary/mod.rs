//! # Dictionary
//!
//! The [`TokenDictionary`] is the single source of truth for token ids;
//! every encoding policy reads it, and only the encoder writes it.

mod token_dictionary;

#[doc(inline)]
pub use token_dictionary::*;

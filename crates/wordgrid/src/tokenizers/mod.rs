//! # Tokenizers
//!
//! A [`StringTokenizer`] turns one input sequence into an ordered stream of
//! `&str` tokens borrowed from that sequence.
//!
//! * [`SplitByAnyOf`] - split on any character of a delimiter set.
//! * [`CharExtract`] - one token per character.
//!
//! ## Example
//!
//! ```rust
//! use wordgrid::tokenizers::{SplitByAnyOf, StringTokenizer};
//!
//! let tokenizer = SplitByAnyOf::new(" ,");
//! assert_eq!(tokenizer.tokenize("fast, flexible"), vec!["fast", "flexible"]);
//! ```

mod char_extract;
mod split_by_any_of;
mod string_tokenizer;

#[doc(inline)]
pub use char_extract::*;
#[doc(inline)]
pub use split_by_any_of::*;
#[doc(inline)]
pub use string_tokenizer::*;

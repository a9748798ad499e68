//! # Encoding Policies
//!
//! A policy turns the dictionary ids of a batch into per-sequence values.
//!
//! * [`OrdinalPolicy`] - the ids themselves, sequence-width.
//! * [`PresencePolicy`] - `0`/`1` flags, vocabulary-width.
//! * [`TfIdfPolicy`] - TF-IDF weights, vocabulary-width.
//!
//! [`EncodingPolicy`] is the tagged union the encoder owns; every variant
//! implements the common [`PolicyAccumulator`] contract.

mod encoding_policy;
mod ordinal;
mod policy_accumulator;
mod presence;
mod tf_idf;

#[doc(inline)]
pub use encoding_policy::*;
#[doc(inline)]
pub use ordinal::*;
#[doc(inline)]
pub use policy_accumulator::*;
#[doc(inline)]
pub use presence::*;
#[doc(inline)]
pub use tf_idf::*;

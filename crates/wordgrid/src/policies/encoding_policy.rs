//! # Encoding Policy Selection

use serde::{Deserialize, Serialize};

use crate::{
    dictionary::TokenDictionary,
    errors::WGResult,
    output::EncodedRows,
    policies::{OrdinalPolicy, PolicyAccumulator, PresencePolicy, TfIdfPolicy, TfVariant},
    types::TokenType,
};

/// The configuration-level policy tag.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// See [`OrdinalPolicy`].
    #[default]
    Ordinal,

    /// See [`PresencePolicy`].
    Presence,

    /// See [`TfIdfPolicy`].
    TfIdf,
}

/// A live encoding policy: configuration plus accumulated state.
///
/// All variants share the encoder's single [`TokenDictionary`].
#[derive(Debug, Clone, PartialEq)]
pub enum EncodingPolicy {
    /// Per-occurrence dictionary ids.
    Ordinal(OrdinalPolicy),

    /// Per-sequence presence flags over the dictionary.
    Presence(PresencePolicy),

    /// Per-sequence TF-IDF weights over the dictionary.
    TfIdf(TfIdfPolicy),
}

impl Default for EncodingPolicy {
    fn default() -> Self {
        Self::ordinal()
    }
}

impl From<PolicyKind> for EncodingPolicy {
    fn from(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Ordinal => Self::ordinal(),
            PolicyKind::Presence => Self::presence(),
            PolicyKind::TfIdf => Self::TfIdf(TfIdfPolicy::default()),
        }
    }
}

impl EncodingPolicy {
    /// A fresh [`OrdinalPolicy`].
    pub fn ordinal() -> Self {
        Self::Ordinal(OrdinalPolicy::new())
    }

    /// A fresh [`PresencePolicy`].
    pub fn presence() -> Self {
        Self::Presence(PresencePolicy::new())
    }

    /// A fresh [`TfIdfPolicy`].
    pub fn tf_idf(
        tf_variant: TfVariant,
        smooth_idf: bool,
    ) -> Self {
        Self::TfIdf(TfIdfPolicy::new(tf_variant, smooth_idf))
    }

    /// The policy tag.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Ordinal(_) => PolicyKind::Ordinal,
            Self::Presence(_) => PolicyKind::Presence,
            Self::TfIdf(_) => PolicyKind::TfIdf,
        }
    }

    /// The TF-IDF policy, if this is one.
    pub fn as_tf_idf(&self) -> Option<&TfIdfPolicy> {
        match self {
            Self::TfIdf(policy) => Some(policy),
            _ => None,
        }
    }
}

impl PolicyAccumulator for EncodingPolicy {
    fn validate_batch(
        &self,
        token_counts: &[usize],
    ) -> WGResult<()> {
        match self {
            Self::Ordinal(p) => p.validate_batch(token_counts),
            Self::Presence(p) => p.validate_batch(token_counts),
            Self::TfIdf(p) => p.validate_batch(token_counts),
        }
    }

    fn begin<T: TokenType>(
        &mut self,
        num_sequences: usize,
        dictionary: &TokenDictionary<T>,
    ) {
        match self {
            Self::Ordinal(p) => p.begin(num_sequences, dictionary),
            Self::Presence(p) => p.begin(num_sequences, dictionary),
            Self::TfIdf(p) => p.begin(num_sequences, dictionary),
        }
    }

    fn observe(
        &mut self,
        sequence_index: usize,
        token_id: usize,
    ) {
        match self {
            Self::Ordinal(p) => p.observe(sequence_index, token_id),
            Self::Presence(p) => p.observe(sequence_index, token_id),
            Self::TfIdf(p) => p.observe(sequence_index, token_id),
        }
    }

    fn finalize<T: TokenType>(
        &mut self,
        dictionary: &TokenDictionary<T>,
    ) -> EncodedRows {
        match self {
            Self::Ordinal(p) => p.finalize(dictionary),
            Self::Presence(p) => p.finalize(dictionary),
            Self::TfIdf(p) => p.finalize(dictionary),
        }
    }

    fn discard_batch(&mut self) {
        match self {
            Self::Ordinal(p) => p.discard_batch(),
            Self::Presence(p) => p.discard_batch(),
            Self::TfIdf(p) => p.discard_batch(),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Ordinal(p) => p.reset(),
            Self::Presence(p) => p.reset(),
            Self::TfIdf(p) => p.reset(),
        }
    }
}

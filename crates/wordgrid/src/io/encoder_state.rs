//! # Encoder State

use serde::{Deserialize, Serialize};

use crate::{
    dictionary::TokenDictionary,
    encoding::StringEncoder,
    errors::{WGResult, WordgridError},
    policies::{EncodingPolicy, PolicyKind, TfIdfPolicy, TfVariant},
    types::{TokenType, WGHashSet},
};

/// Persisted policy configuration and counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyState {
    /// An ordinal policy; nothing persists beyond the dictionary.
    Ordinal,

    /// A presence policy; nothing persists beyond the dictionary.
    Presence,

    /// A TF-IDF policy and its document counters.
    TfIdf {
        /// The term-frequency scheme.
        tf_variant: TfVariant,

        /// Whether idf smoothing is enabled.
        smooth_idf: bool,

        /// Total sequences committed.
        document_count: u64,

        /// Per-token document frequencies, indexed by `id - 1`.
        document_frequency: Vec<u64>,
    },
}

impl PolicyState {
    /// The policy tag.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Ordinal => PolicyKind::Ordinal,
            Self::Presence => PolicyKind::Presence,
            Self::TfIdf { .. } => PolicyKind::TfIdf,
        }
    }
}

impl From<&EncodingPolicy> for PolicyState {
    fn from(policy: &EncodingPolicy) -> Self {
        match policy {
            EncodingPolicy::Ordinal(_) => Self::Ordinal,
            EncodingPolicy::Presence(_) => Self::Presence,
            EncodingPolicy::TfIdf(p) => Self::TfIdf {
                tf_variant: p.tf_variant(),
                smooth_idf: p.smooth_idf(),
                document_count: p.document_count(),
                document_frequency: p.document_frequencies().to_vec(),
            },
        }
    }
}

impl From<PolicyState> for EncodingPolicy {
    fn from(state: PolicyState) -> Self {
        match state {
            PolicyState::Ordinal => EncodingPolicy::ordinal(),
            PolicyState::Presence => EncodingPolicy::presence(),
            PolicyState::TfIdf {
                tf_variant,
                smooth_idf,
                document_count,
                document_frequency,
            } => EncodingPolicy::TfIdf(TfIdfPolicy::with_counters(
                tf_variant,
                smooth_idf,
                document_count,
                document_frequency,
            )),
        }
    }
}

/// The canonical, format-independent snapshot of a [`StringEncoder`].
///
/// Ids are positional: `tokens[i]` is bound to id `i + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncoderState {
    /// Tokens ordered by id.
    pub tokens: Vec<String>,

    /// The policy configuration and counters.
    pub policy: PolicyState,
}

impl EncoderState {
    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check the state is internally consistent.
    ///
    /// Tokens must be non-empty and unique; TF-IDF document frequencies
    /// must align with the tokens and lie in `1..=document_count`.
    /// Every decoder calls this before handing a state back.
    pub fn validate(&self) -> WGResult<()> {
        let mut seen: WGHashSet<&str> = WGHashSet::default();
        for (idx, token) in self.tokens.iter().enumerate() {
            if token.is_empty() {
                return Err(WordgridError::VocabConflict(format!(
                    "empty token at id {}",
                    idx + 1
                )));
            }
            if !seen.insert(token.as_str()) {
                return Err(WordgridError::VocabConflict(format!(
                    "duplicate token {token:?} at id {}",
                    idx + 1
                )));
            }
        }

        if let PolicyState::TfIdf {
            document_count,
            document_frequency,
            ..
        } = &self.policy
        {
            TfIdfPolicy::check_counters(
                *document_count,
                document_frequency,
                self.tokens.len(),
            )?;
        }

        Ok(())
    }
}

impl<T: TokenType> From<&StringEncoder<T>> for EncoderState {
    fn from(encoder: &StringEncoder<T>) -> Self {
        Self {
            tokens: encoder
                .dictionary()
                .tokens()
                .iter()
                .map(|t| t.to_string())
                .collect(),
            policy: encoder.policy().into(),
        }
    }
}

impl<T: TokenType> TryFrom<EncoderState> for StringEncoder<T> {
    type Error = WordgridError;

    fn try_from(state: EncoderState) -> WGResult<Self> {
        let dictionary = TokenDictionary::from_tokens(&state.tokens)?;
        StringEncoder::from_parts(dictionary, state.policy.into())
    }
}

//! # String Encoder

use crate::{
    dictionary::TokenDictionary,
    errors::{WGResult, WordgridError},
    io::EncoderState,
    output::{EncodedRows, FeatureMatrix, SparseMatrix},
    policies::{EncodingPolicy, PolicyAccumulator, TfIdfPolicy},
    tokenizers::StringTokenizer,
    types::TokenType,
};

/// Lifecycle phase of a [`StringEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum EncoderPhase {
    /// No tokens have been processed.
    Empty,

    /// The dictionary holds at least one token.
    Populated,
}

/// Dictionary-backed batch encoder.
///
/// Owns one [`TokenDictionary`] and one [`EncodingPolicy`]; both grow
/// across `encode_*` calls until [`reset`](Self::reset). Cloning copies
/// the two together.
///
/// Ids are assigned in first-occurrence order: sequence index ascending,
/// then token position ascending. Reordering a batch changes its ids.
///
/// Encoding is all-or-nothing: on error the dictionary and the policy's
/// persistent counters are left as they were before the call.
#[derive(Debug, Clone, PartialEq)]
pub struct StringEncoder<T: TokenType> {
    dictionary: TokenDictionary<T>,
    policy: EncodingPolicy,
    parallel: bool,
}

impl<T: TokenType> Default for StringEncoder<T> {
    fn default() -> Self {
        Self::new(EncodingPolicy::default())
    }
}

impl<T: TokenType> StringEncoder<T> {
    /// Create an empty encoder for `policy`.
    pub fn new<P>(policy: P) -> Self
    where
        P: Into<EncodingPolicy>,
    {
        Self {
            dictionary: TokenDictionary::new(),
            policy: policy.into(),
            parallel: false,
        }
    }

    /// Assemble an encoder from restored parts.
    ///
    /// ## Returns
    /// The encoder, or [`WordgridError::VocabConflict`] if the policy's
    /// counters do not line up with the dictionary.
    pub fn from_parts(
        dictionary: TokenDictionary<T>,
        policy: EncodingPolicy,
    ) -> WGResult<Self> {
        if let Some(tf_idf) = policy.as_tf_idf() {
            TfIdfPolicy::check_counters(
                tf_idf.document_count(),
                tf_idf.document_frequencies(),
                dictionary.len(),
            )?;
        }

        Ok(Self {
            dictionary,
            policy,
            parallel: false,
        })
    }

    /// Restore an encoder from an [`EncoderState`].
    pub fn from_state(state: EncoderState) -> WGResult<Self> {
        state.try_into()
    }

    /// Capture the dictionary and policy counters as an [`EncoderState`].
    pub fn to_state(&self) -> EncoderState {
        self.into()
    }

    /// Should tokenization of a batch be spread across threads?
    ///
    /// Only honored with the "rayon" feature.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Set whether tokenization should be spread across threads.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Set whether tokenization should be spread across threads, and return self.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// The shared dictionary.
    pub fn dictionary(&self) -> &TokenDictionary<T> {
        &self.dictionary
    }

    /// The encoding policy and its counters.
    pub fn policy(&self) -> &EncodingPolicy {
        &self.policy
    }

    /// The lifecycle phase.
    pub fn phase(&self) -> EncoderPhase {
        if self.dictionary.is_empty() {
            EncoderPhase::Empty
        } else {
            EncoderPhase::Populated
        }
    }

    /// Discard the dictionary and every policy counter.
    ///
    /// The policy configuration is kept.
    pub fn reset(&mut self) {
        self.dictionary.clear();
        self.policy.reset();
    }

    /// Encode a batch as a zero-padded [`FeatureMatrix`].
    ///
    /// ## Arguments
    /// * `batch` - The text sequences; row `i` encodes `batch[i]`.
    /// * `tokenizer` - The tokenizer to split each sequence with.
    pub fn encode_dense<S, K>(
        &mut self,
        batch: &[S],
        tokenizer: &K,
    ) -> WGResult<FeatureMatrix>
    where
        S: AsRef<str> + Sync,
        K: StringTokenizer,
    {
        Ok(self.encode_rows(batch, tokenizer)?.into_dense())
    }

    /// Encode a batch as a CSR [`SparseMatrix`].
    ///
    /// Same cells as [`encode_dense`](Self::encode_dense), zeros dropped.
    ///
    /// ## Arguments
    /// * `batch` - The text sequences; row `i` encodes `batch[i]`.
    /// * `tokenizer` - The tokenizer to split each sequence with.
    pub fn encode_sparse<S, K>(
        &mut self,
        batch: &[S],
        tokenizer: &K,
    ) -> WGResult<SparseMatrix>
    where
        S: AsRef<str> + Sync,
        K: StringTokenizer,
    {
        Ok(self.encode_rows(batch, tokenizer)?.into_sparse())
    }

    /// Encode a batch as unpadded per-sequence rows.
    ///
    /// ## Arguments
    /// * `batch` - The text sequences; row `i` encodes `batch[i]`.
    /// * `tokenizer` - The tokenizer to split each sequence with.
    pub fn encode_ragged<S, K>(
        &mut self,
        batch: &[S],
        tokenizer: &K,
    ) -> WGResult<Vec<Vec<f64>>>
    where
        S: AsRef<str> + Sync,
        K: StringTokenizer,
    {
        Ok(self.encode_rows(batch, tokenizer)?.into_ragged())
    }

    /// Encode a batch, deferring the output shape.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch, tokenizer)))]
    pub fn encode_rows<S, K>(
        &mut self,
        batch: &[S],
        tokenizer: &K,
    ) -> WGResult<EncodedRows>
    where
        S: AsRef<str> + Sync,
        K: StringTokenizer,
    {
        let sequences = self.tokenize_batch(batch, tokenizer);

        let token_counts: Vec<usize> = sequences.iter().map(Vec::len).collect();
        self.policy.validate_batch(&token_counts)?;

        let start_len = self.dictionary.len();
        self.policy.begin(sequences.len(), &self.dictionary);

        if let Err(err) = self.accumulate(&sequences) {
            self.dictionary.truncate(start_len);
            self.policy.discard_batch();
            return Err(err);
        }

        let rows = self.policy.finalize(&self.dictionary);

        log::debug!(
            "encoded {} sequences ({} tokens) with {} policy: {} new tokens, width {}",
            rows.len(),
            token_counts.iter().sum::<usize>(),
            self.policy.kind(),
            self.dictionary.len() - start_len,
            rows.width(),
        );

        Ok(rows)
    }

    fn accumulate(
        &mut self,
        sequences: &[Vec<&str>],
    ) -> WGResult<()> {
        for (sequence_index, tokens) in sequences.iter().enumerate() {
            for token in tokens {
                let id = self.dictionary.ensure_token(token)?;
                let id = id.to_usize().ok_or(WordgridError::VocabSizeOverflow {
                    size: self.dictionary.len(),
                })?;
                self.policy.observe(sequence_index, id);
            }
        }
        Ok(())
    }

    #[cfg(feature = "rayon")]
    fn tokenize_batch<'a, S, K>(
        &self,
        batch: &'a [S],
        tokenizer: &K,
    ) -> Vec<Vec<&'a str>>
    where
        S: AsRef<str> + Sync,
        K: StringTokenizer,
    {
        use rayon::prelude::*;

        if self.parallel {
            batch
                .par_iter()
                .map(|text| tokenizer.tokenize(text.as_ref()))
                .collect()
        } else {
            batch
                .iter()
                .map(|text| tokenizer.tokenize(text.as_ref()))
                .collect()
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn tokenize_batch<'a, S, K>(
        &self,
        batch: &'a [S],
        tokenizer: &K,
    ) -> Vec<Vec<&'a str>>
    where
        S: AsRef<str> + Sync,
        K: StringTokenizer,
    {
        batch
            .iter()
            .map(|text| tokenizer.tokenize(text.as_ref()))
            .collect()
    }
}

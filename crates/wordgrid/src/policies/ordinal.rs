//! # Ordinal Policy

use crate::{
    dictionary::TokenDictionary,
    output::EncodedRows,
    policies::PolicyAccumulator,
    types::TokenType,
};

/// Emits each token's dictionary id, in sequence order.
///
/// Rows are sequence-width; the dense width is the longest sequence
/// in the batch, padded with `0`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrdinalPolicy {
    rows: Vec<Vec<usize>>,
}

impl OrdinalPolicy {
    /// Create a new ordinal policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PolicyAccumulator for OrdinalPolicy {
    fn begin<T: TokenType>(
        &mut self,
        num_sequences: usize,
        _dictionary: &TokenDictionary<T>,
    ) {
        self.rows.clear();
        self.rows.resize_with(num_sequences, Vec::new);
    }

    fn observe(
        &mut self,
        sequence_index: usize,
        token_id: usize,
    ) {
        self.rows[sequence_index].push(token_id);
    }

    fn finalize<T: TokenType>(
        &mut self,
        _dictionary: &TokenDictionary<T>,
    ) -> EncodedRows {
        let rows = core::mem::take(&mut self.rows)
            .into_iter()
            .map(|ids| ids.into_iter().map(|id| id as f64).collect())
            .collect();

        EncodedRows::from_ragged(rows)
    }

    fn discard_batch(&mut self) {
        self.rows.clear();
    }
}

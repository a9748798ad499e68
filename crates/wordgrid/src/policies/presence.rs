//! # Presence Policy

use crate::{
    dictionary::TokenDictionary,
    output::EncodedRows,
    policies::PolicyAccumulator,
    types::TokenType,
};

/// Binary bag-of-words: one `0`/`1` value per dictionary id.
///
/// Rows are vocabulary-width; the width is the dictionary size at the
/// end of the batch, so earlier rows cover tokens first seen later.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresencePolicy {
    seen: Vec<Vec<usize>>,
}

impl PresencePolicy {
    /// Create a new presence policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PolicyAccumulator for PresencePolicy {
    fn begin<T: TokenType>(
        &mut self,
        num_sequences: usize,
        _dictionary: &TokenDictionary<T>,
    ) {
        self.seen.clear();
        self.seen.resize_with(num_sequences, Vec::new);
    }

    fn observe(
        &mut self,
        sequence_index: usize,
        token_id: usize,
    ) {
        self.seen[sequence_index].push(token_id);
    }

    fn finalize<T: TokenType>(
        &mut self,
        dictionary: &TokenDictionary<T>,
    ) -> EncodedRows {
        let width = dictionary.len();

        let rows = core::mem::take(&mut self.seen)
            .into_iter()
            .map(|ids| {
                let mut row = vec![0.0; width];
                for id in ids {
                    row[id - 1] = 1.0;
                }
                row
            })
            .collect();

        EncodedRows::new(rows, width)
    }

    fn discard_batch(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_width_flags() {
        type T = u32;
        let dict = TokenDictionary::<T>::from_tokens(["G", "A", "C", "B"]).unwrap();
        let mut policy = PresencePolicy::new();

        policy.begin(2, &dict);
        for id in [1, 2, 2, 2] {
            policy.observe(0, id);
        }
        policy.observe(1, 4);

        let rows = policy.finalize(&dict);
        assert_eq!(rows.width(), 4);
        assert_eq!(
            rows.rows(),
            &[vec![1.0, 1.0, 0.0, 0.0], vec![0.0, 0.0, 0.0, 1.0]]
        );
    }
}

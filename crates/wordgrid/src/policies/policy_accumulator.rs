//! # Policy Accumulator Trait

use crate::{
    dictionary::TokenDictionary,
    errors::WGResult,
    output::EncodedRows,
    types::TokenType,
};

/// The per-batch accumulation contract shared by every encoding policy.
///
/// The encoder drives a batch as:
/// 1. [`validate_batch`](Self::validate_batch) with every sequence's token count;
/// 2. [`begin`](Self::begin);
/// 3. [`observe`](Self::observe) for each token, sequence-major;
/// 4. [`finalize`](Self::finalize), or [`discard_batch`](Self::discard_batch) on failure.
///
/// Token ids passed to `observe` are dictionary ids (`>= 1`) as `usize`.
pub trait PolicyAccumulator {
    /// Reject a batch before any state is touched.
    ///
    /// ## Arguments
    /// * `token_counts` - The number of tokens in each sequence.
    fn validate_batch(
        &self,
        token_counts: &[usize],
    ) -> WGResult<()> {
        let _ = token_counts;
        Ok(())
    }

    /// Prepare the batch accumulators.
    fn begin<T: TokenType>(
        &mut self,
        num_sequences: usize,
        dictionary: &TokenDictionary<T>,
    );

    /// Accumulate one token occurrence.
    fn observe(
        &mut self,
        sequence_index: usize,
        token_id: usize,
    );

    /// Commit the batch and produce per-sequence values.
    ///
    /// `dictionary` is the dictionary after every token of the batch
    /// has been inserted.
    fn finalize<T: TokenType>(
        &mut self,
        dictionary: &TokenDictionary<T>,
    ) -> EncodedRows;

    /// Drop the batch accumulators without committing anything.
    fn discard_batch(&mut self);

    /// Return all persistent state to its initial empty value.
    fn reset(&mut self) {
        self.discard_batch();
    }
}

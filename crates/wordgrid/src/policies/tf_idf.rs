//! # TF-IDF Policy

use serde::{Deserialize, Serialize};

use crate::{
    dictionary::TokenDictionary,
    errors::{WGResult, WordgridError},
    output::EncodedRows,
    policies::PolicyAccumulator,
    types::{TokenType, WGHashMap, hash_map_new},
};

/// Term-frequency weighting scheme.
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
pub enum TfVariant {
    /// The occurrence count.
    #[default]
    RawCount,

    /// `1` if the token occurs, else `0`.
    Binary,

    /// `1 + ln(count)` if the token occurs, else `0`.
    SublinearTf,

    /// The count divided by the number of tokens in the sequence.
    ///
    /// Undefined for empty sequences; batches containing one are rejected.
    TermFrequency,
}

impl TfVariant {
    /// Weight `count` occurrences in a sequence of `sequence_len` tokens.
    pub fn weight(
        self,
        count: u64,
        sequence_len: u64,
    ) -> f64 {
        if count == 0 {
            return 0.0;
        }
        match self {
            Self::RawCount => count as f64,
            Self::Binary => 1.0,
            Self::SublinearTf => 1.0 + (count as f64).ln(),
            Self::TermFrequency => count as f64 / sequence_len as f64,
        }
    }
}

/// Term-frequency × inverse-document-frequency weighting.
///
/// The document counter and per-token document frequencies persist
/// across batches, like the dictionary; the idf of a batch therefore
/// reflects every sequence the encoder has seen.
///
/// * smoothed: `idf = ln((1 + N) / (1 + df)) + 1`
/// * unsmoothed: `idf = ln(N / df) + 1`
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfPolicy {
    tf_variant: TfVariant,
    smooth_idf: bool,

    /// Total sequences committed, `N`.
    document_count: u64,

    /// Sequences containing each token; `document_frequency[id - 1]`.
    document_frequency: Vec<u64>,

    /// Batch accumulator: ``{ id -> count }`` per sequence.
    counts: Vec<WGHashMap<usize, u64>>,

    /// Batch accumulator: tokens per sequence.
    lengths: Vec<u64>,
}

impl Default for TfIdfPolicy {
    fn default() -> Self {
        Self::new(TfVariant::default(), true)
    }
}

impl TfIdfPolicy {
    /// Create a policy with empty counters.
    ///
    /// ## Arguments
    /// * `tf_variant` - The term-frequency scheme.
    /// * `smooth_idf` - Whether to smooth the idf.
    pub fn new(
        tf_variant: TfVariant,
        smooth_idf: bool,
    ) -> Self {
        Self {
            tf_variant,
            smooth_idf,
            document_count: 0,
            document_frequency: Vec::new(),
            counts: Vec::new(),
            lengths: Vec::new(),
        }
    }

    /// Create a policy with restored counters.
    ///
    /// The caller is responsible for `document_frequency` being aligned
    /// with the dictionary it will be used with.
    pub fn with_counters(
        tf_variant: TfVariant,
        smooth_idf: bool,
        document_count: u64,
        document_frequency: Vec<u64>,
    ) -> Self {
        Self {
            document_count,
            document_frequency,
            ..Self::new(tf_variant, smooth_idf)
        }
    }

    /// The term-frequency scheme.
    pub fn tf_variant(&self) -> TfVariant {
        self.tf_variant
    }

    /// Is idf smoothing enabled?
    pub fn smooth_idf(&self) -> bool {
        self.smooth_idf
    }

    /// Total sequences committed so far.
    pub fn document_count(&self) -> u64 {
        self.document_count
    }

    /// Document frequencies, indexed by `id - 1`.
    pub fn document_frequencies(&self) -> &[u64] {
        &self.document_frequency
    }

    /// Document frequency of `token_id`; `0` for unknown ids.
    pub fn document_frequency(
        &self,
        token_id: usize,
    ) -> u64 {
        token_id
            .checked_sub(1)
            .and_then(|idx| self.document_frequency.get(idx))
            .copied()
            .unwrap_or(0)
    }

    /// Check restored counters against a dictionary of `token_count` tokens.
    ///
    /// ## Arguments
    /// * `document_count` - Total sequences committed, `N`.
    /// * `document_frequency` - Per-token document frequencies, indexed by `id - 1`.
    /// * `token_count` - The dictionary size.
    ///
    /// ## Returns
    /// [`WordgridError::VocabConflict`] unless there is one frequency per
    /// token and each lies in `1..=document_count`.
    pub fn check_counters(
        document_count: u64,
        document_frequency: &[u64],
        token_count: usize,
    ) -> WGResult<()> {
        if document_frequency.len() != token_count {
            return Err(WordgridError::VocabConflict(format!(
                "document frequency table has {} entries; dictionary has {token_count} tokens",
                document_frequency.len(),
            )));
        }
        if let Some(idx) = document_frequency
            .iter()
            .position(|&df| df == 0 || df > document_count)
        {
            return Err(WordgridError::VocabConflict(format!(
                "document frequency {} of id {} is outside 1..={document_count}",
                document_frequency[idx],
                idx + 1
            )));
        }
        Ok(())
    }

    /// The inverse document frequency of `token_id`.
    ///
    /// ## Returns
    /// `None` if the token has never been committed (`df == 0`).
    pub fn idf(
        &self,
        token_id: usize,
    ) -> Option<f64> {
        match self.document_frequency(token_id) {
            0 => None,
            df => Some(self.idf_for(df)),
        }
    }

    fn idf_for(
        &self,
        df: u64,
    ) -> f64 {
        let n = self.document_count as f64;
        let df = df as f64;
        if self.smooth_idf {
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        } else {
            (n / df).ln() + 1.0
        }
    }
}

impl PolicyAccumulator for TfIdfPolicy {
    fn validate_batch(
        &self,
        token_counts: &[usize],
    ) -> WGResult<()> {
        if self.tf_variant != TfVariant::TermFrequency {
            return Ok(());
        }
        match token_counts.iter().position(|&n| n == 0) {
            Some(index) => Err(WordgridError::EmptySequence { index }),
            None => Ok(()),
        }
    }

    fn begin<T: TokenType>(
        &mut self,
        num_sequences: usize,
        _dictionary: &TokenDictionary<T>,
    ) {
        self.counts.clear();
        self.counts.resize_with(num_sequences, hash_map_new);
        self.lengths.clear();
        self.lengths.resize(num_sequences, 0);
    }

    fn observe(
        &mut self,
        sequence_index: usize,
        token_id: usize,
    ) {
        *self.counts[sequence_index].entry(token_id).or_insert(0) += 1;
        self.lengths[sequence_index] += 1;
    }

    fn finalize<T: TokenType>(
        &mut self,
        dictionary: &TokenDictionary<T>,
    ) -> EncodedRows {
        let width = dictionary.len();
        let counts = core::mem::take(&mut self.counts);
        let lengths = core::mem::take(&mut self.lengths);

        self.document_count += counts.len() as u64;
        self.document_frequency.resize(width, 0);
        for seq_counts in &counts {
            for &id in seq_counts.keys() {
                self.document_frequency[id - 1] += 1;
            }
        }

        let rows = counts
            .iter()
            .zip(lengths)
            .map(|(seq_counts, len)| {
                let mut row = vec![0.0; width];
                for (&id, &count) in seq_counts {
                    let tf = self.tf_variant.weight(count, len);
                    row[id - 1] = tf * self.idf_for(self.document_frequency[id - 1]);
                }
                row
            })
            .collect();

        EncodedRows::new(rows, width)
    }

    fn discard_batch(&mut self) {
        self.counts.clear();
        self.lengths.clear();
    }

    fn reset(&mut self) {
        self.discard_batch();
        self.document_count = 0;
        self.document_frequency.clear();
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_tf_variant_names() {
        let names: Vec<String> = TfVariant::iter().map(|v| v.to_string()).collect();
        assert_eq!(
            names,
            vec!["raw-count", "binary", "sublinear-tf", "term-frequency"]
        );
        for variant in TfVariant::iter() {
            assert_eq!(TfVariant::from_str(&variant.to_string()).unwrap(), variant);
        }
        assert!(TfVariant::from_str("bogus").is_err());
    }

    #[test]
    fn test_tf_weights() {
        assert_eq!(TfVariant::RawCount.weight(3, 10), 3.0);
        assert_eq!(TfVariant::Binary.weight(3, 10), 1.0);
        assert_eq!(TfVariant::SublinearTf.weight(1, 10), 1.0);
        assert_eq!(TfVariant::TermFrequency.weight(3, 10), 0.3);
        for variant in TfVariant::iter() {
            assert_eq!(variant.weight(0, 10), 0.0);
        }
    }

    #[test]
    fn test_idf_modes() {
        let smooth = TfIdfPolicy::with_counters(TfVariant::RawCount, true, 3, vec![3, 1]);
        assert_eq!(smooth.idf(1), Some(1.0));
        assert!((smooth.idf(2).unwrap() - (2f64.ln() + 1.0)).abs() < 1e-12);
        assert_eq!(smooth.idf(0), None);
        assert_eq!(smooth.idf(3), None);

        let raw = TfIdfPolicy::with_counters(TfVariant::RawCount, false, 3, vec![3, 1]);
        assert_eq!(raw.idf(1), Some(1.0));
        assert!((raw.idf(2).unwrap() - (3f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_check_counters() {
        assert!(TfIdfPolicy::check_counters(0, &[], 0).is_ok());
        assert!(TfIdfPolicy::check_counters(3, &[3, 1], 2).is_ok());

        for (n, df, len) in [
            (3, vec![3], 2),
            (3, vec![3, 1, 1], 2),
            (3, vec![0, 1], 2),
            (3, vec![4, 1], 2),
            (0, vec![1], 1),
        ] {
            assert!(matches!(
                TfIdfPolicy::check_counters(n, &df, len),
                Err(WordgridError::VocabConflict(_))
            ));
        }
    }

    #[test]
    fn test_term_frequency_rejects_empty_sequences() {
        let policy = TfIdfPolicy::new(TfVariant::TermFrequency, true);
        assert!(policy.validate_batch(&[2, 1]).is_ok());
        assert!(matches!(
            policy.validate_batch(&[2, 0, 0]),
            Err(WordgridError::EmptySequence { index: 1 })
        ));

        let policy = TfIdfPolicy::new(TfVariant::RawCount, true);
        assert!(policy.validate_batch(&[0]).is_ok());
    }

    #[test]
    fn test_counters_accumulate_and_reset() {
        type T = u32;
        let dict = TokenDictionary::<T>::from_tokens(["a", "b"]).unwrap();
        let mut policy = TfIdfPolicy::default();

        policy.begin(2, &dict);
        policy.observe(0, 1);
        policy.observe(0, 1);
        policy.observe(1, 2);
        let rows = policy.finalize(&dict);

        assert_eq!(policy.document_count(), 2);
        assert_eq!(policy.document_frequencies(), &[1, 1]);

        let idf = (3.0f64 / 2.0).ln() + 1.0;
        assert_eq!(rows.width(), 2);
        assert!((rows.rows()[0][0] - 2.0 * idf).abs() < 1e-12);
        assert_eq!(rows.rows()[0][1], 0.0);
        assert!((rows.rows()[1][1] - idf).abs() < 1e-12);

        policy.begin(1, &dict);
        policy.observe(0, 1);
        policy.finalize(&dict);
        assert_eq!(policy.document_count(), 3);
        assert_eq!(policy.document_frequencies(), &[2, 1]);

        policy.reset();
        assert_eq!(policy, TfIdfPolicy::default());
    }
}

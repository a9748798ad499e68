#![allow(missing_docs)]

use wordgrid::{
    StringEncoder,
    WordgridError,
    policies::{EncodingPolicy, TfVariant},
    tokenizers::{CharExtract, SplitByAnyOf},
};

const GENES: [&str; 3] = ["GACCA", "ABCABCD", "GAB"];

const TOLERANCE: f64 = 1e-12;

fn assert_rows_close(
    actual: &[Vec<f64>],
    expected: &[[f64; 5]; 3],
    label: &str,
) {
    assert_eq!(actual.len(), expected.len(), "{label}");
    for (row_idx, (row, want)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(row.len(), want.len(), "{label}: row {row_idx}");
        for (col, (&a, &e)) in row.iter().zip(want).enumerate() {
            assert!(
                (a - e).abs() < TOLERANCE,
                "{label}: ({row_idx}, {col}) = {a}; expected {e}"
            );
        }
    }
}

fn check(
    tf_variant: TfVariant,
    smooth_idf: bool,
    expected: [[f64; 5]; 3],
) {
    type T = u32;
    let label = format!("{tf_variant} smooth={smooth_idf}");

    let mut encoder = StringEncoder::<T>::new(EncodingPolicy::tf_idf(tf_variant, smooth_idf));
    let dense = encoder.encode_dense(&GENES, &CharExtract).unwrap();
    assert_eq!(dense.shape(), (3, 5));
    assert_rows_close(&dense.to_rows(), &expected, &label);

    let mut encoder = StringEncoder::<T>::new(EncodingPolicy::tf_idf(tf_variant, smooth_idf));
    let ragged = encoder.encode_ragged(&GENES, &CharExtract).unwrap();
    assert_rows_close(&ragged, &expected, &label);

    let tf_idf = encoder.policy().as_tf_idf().unwrap();
    assert_eq!(tf_idf.document_count(), 3);
    assert_eq!(tf_idf.document_frequencies(), &[2, 3, 2, 2, 1]);
}

#[test]
fn raw_count_smooth() {
    check(
        TfVariant::RawCount,
        true,
        [
            [1.2876820724517808, 2.0, 2.5753641449035616, 0.0, 0.0],
            [0.0, 2.0, 2.5753641449035616, 2.5753641449035616, 1.6931471805599454],
            [1.2876820724517808, 1.0, 0.0, 1.2876820724517808, 0.0],
        ],
    );
}

#[test]
fn raw_count_unsmoothed() {
    check(
        TfVariant::RawCount,
        false,
        [
            [1.4054651081081644, 2.0, 2.8109302162163288, 0.0, 0.0],
            [0.0, 2.0, 2.8109302162163288, 2.8109302162163288, 2.0986122886681100],
            [1.4054651081081644, 1.0, 0.0, 1.4054651081081644, 0.0],
        ],
    );
}

#[test]
fn binary_smooth() {
    check(
        TfVariant::Binary,
        true,
        [
            [1.2876820724517808, 1.0, 1.2876820724517808, 0.0, 0.0],
            [0.0, 1.0, 1.2876820724517808, 1.2876820724517808, 1.6931471805599454],
            [1.2876820724517808, 1.0, 0.0, 1.2876820724517808, 0.0],
        ],
    );
}

#[test]
fn binary_unsmoothed() {
    check(
        TfVariant::Binary,
        false,
        [
            [1.4054651081081644, 1.0, 1.4054651081081644, 0.0, 0.0],
            [0.0, 1.0, 1.4054651081081644, 1.4054651081081644, 2.0986122886681100],
            [1.4054651081081644, 1.0, 0.0, 1.4054651081081644, 0.0],
        ],
    );
}

#[test]
fn sublinear_smooth() {
    check(
        TfVariant::SublinearTf,
        true,
        [
            [1.2876820724517808, 1.6931471805599454, 2.1802352704293200, 0.0, 0.0],
            [0.0, 1.6931471805599454, 2.1802352704293200, 2.1802352704293200, 1.6931471805599454],
            [1.2876820724517808, 1.0, 0.0, 1.2876820724517808, 0.0],
        ],
    );
}

#[test]
fn sublinear_unsmoothed() {
    check(
        TfVariant::SublinearTf,
        false,
        [
            [1.4054651081081644, 1.6931471805599454, 2.3796592851687173, 0.0, 0.0],
            [0.0, 1.6931471805599454, 2.3796592851687173, 2.3796592851687173, 2.0986122886681100],
            [1.4054651081081644, 1.0, 0.0, 1.4054651081081644, 0.0],
        ],
    );
}

#[test]
fn term_frequency_smooth() {
    check(
        TfVariant::TermFrequency,
        true,
        [
            [0.2575364144903562, 0.4, 0.5150728289807124, 0.0, 0.0],
            [0.0, 0.2857142857142857, 0.3679091635576516, 0.3679091635576516, 0.2418781686514208],
            [0.4292273574839269, 0.3333333333333333, 0.0, 0.4292273574839269, 0.0],
        ],
    );
}

#[test]
fn term_frequency_unsmoothed() {
    check(
        TfVariant::TermFrequency,
        false,
        [
            [0.2810930216216329, 0.4, 0.5621860432432658, 0.0, 0.0],
            [0.0, 0.2857142857142857, 0.4015614594594755, 0.4015614594594755, 0.2998017555240157],
            [0.4684883693693881, 0.3333333333333333, 0.0, 0.4684883693693881, 0.0],
        ],
    );
}

#[test]
fn counters_accumulate_across_batches() {
    type T = u32;
    let mut once = StringEncoder::<T>::new(EncodingPolicy::tf_idf(TfVariant::RawCount, true));
    let all = once.encode_dense(&GENES, &CharExtract).unwrap();

    let mut split = StringEncoder::<T>::new(EncodingPolicy::tf_idf(TfVariant::RawCount, true));
    split.encode_dense(&GENES[..2], &CharExtract).unwrap();
    let last = split.encode_dense(&GENES[2..], &CharExtract).unwrap();

    assert_eq!(split.policy(), once.policy());
    assert_eq!(split.dictionary(), once.dictionary());
    for (a, e) in last.row(0).iter().zip(all.row(2)) {
        assert!((a - e).abs() < TOLERANCE);
    }
}

#[test]
fn term_frequency_rejects_empty_sequence() {
    type T = u32;
    let mut encoder =
        StringEncoder::<T>::new(EncodingPolicy::tf_idf(TfVariant::TermFrequency, true));

    let err = encoder
        .encode_dense(&["fast machine", "", "learning"], &SplitByAnyOf::new(" "))
        .unwrap_err();
    assert!(matches!(err, WordgridError::EmptySequence { index: 1 }));
    assert!(encoder.dictionary().is_empty());
    assert_eq!(encoder.policy().as_tf_idf().unwrap().document_count(), 0);

    let mut encoder = StringEncoder::<T>::new(EncodingPolicy::tf_idf(TfVariant::RawCount, true));
    let matrix = encoder
        .encode_dense(&["fast machine", "", "learning"], &SplitByAnyOf::new(" "))
        .unwrap();
    assert_eq!(matrix.row(1), &[0.0, 0.0, 0.0]);
}

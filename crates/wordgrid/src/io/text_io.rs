//! # Plain Text State IO
//!
//! Line oriented, in the shape of a base64 vocab file:
//!
//! ```terminaloutput
//! wordgrid-state 1
//! policy tf-idf raw-count true
//! documents 3
//! tokens 5
//! {BASE64 TOKEN} {ID} {DF}
//! ...
//! ```
//!
//! The `policy` line is `policy ordinal`, `policy presence`, or
//! `policy tf-idf {TF_VARIANT} {SMOOTH_IDF}`; the `{DF}` column is only
//! present for `tf-idf`.

use std::io::{BufRead, Write};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{WGResult, WordgridError},
    io::{EncoderState, PolicyState},
    policies::TfVariant,
};

/// The text format header line.
pub const TEXT_STATE_HEADER: &str = "wordgrid-state 1";

/// Write an [`EncoderState`] in the plain text format.
///
/// ## Arguments
/// * `state` - the state to write.
/// * `writer` - the writer to target.
pub fn write_text_state<W: Write>(
    state: &EncoderState,
    writer: &mut W,
) -> WGResult<()> {
    writeln!(writer, "{TEXT_STATE_HEADER}")?;

    let (document_frequency, document_count) = match &state.policy {
        PolicyState::Ordinal => {
            writeln!(writer, "policy ordinal")?;
            (None, 0)
        }
        PolicyState::Presence => {
            writeln!(writer, "policy presence")?;
            (None, 0)
        }
        PolicyState::TfIdf {
            tf_variant,
            smooth_idf,
            document_count,
            document_frequency,
        } => {
            writeln!(writer, "policy tf-idf {tf_variant} {smooth_idf}")?;
            (Some(document_frequency), *document_count)
        }
    };
    writeln!(writer, "documents {document_count}")?;
    writeln!(writer, "tokens {}", state.tokens.len())?;

    for (idx, token) in state.tokens.iter().enumerate() {
        let encoded = BASE64_STANDARD.encode(token.as_bytes());
        match document_frequency {
            Some(df) => writeln!(writer, "{} {} {}", encoded, idx + 1, df[idx])?,
            None => writeln!(writer, "{} {}", encoded, idx + 1)?,
        }
    }

    Ok(())
}

/// Read an [`EncoderState`] from the plain text format.
///
/// The state is validated before it is returned.
///
/// ## Arguments
/// * `reader` - the line reader.
pub fn read_text_state<R: BufRead>(reader: R) -> WGResult<EncoderState> {
    let mut lines = reader.lines();
    let mut next_line = |what: &str| -> WGResult<String> {
        match lines.next() {
            Some(line) => Ok(line?),
            None => Err(parse_error(format!("missing {what} line"))),
        }
    };

    let header = next_line("header")?;
    if header.trim_end() != TEXT_STATE_HEADER {
        return Err(parse_error(format!("unrecognized header {header:?}")));
    }

    let policy_line = next_line("policy")?;
    let policy_fields = keyed_fields(&policy_line, "policy")?;

    let documents_line = next_line("documents")?;
    let document_count: u64 = parse_int(single_field(&documents_line, "documents")?)?;

    let tokens_line = next_line("tokens")?;
    let token_count: usize = parse_int(single_field(&tokens_line, "tokens")?)?;

    let tf_idf_options = match policy_fields.as_slice() {
        ["ordinal"] | ["presence"] => {
            if document_count != 0 {
                return Err(parse_error(format!(
                    "{} policy carries no documents; found {document_count}",
                    policy_fields[0]
                )));
            }
            None
        }
        ["tf-idf", tf_variant, smooth_idf] => {
            let tf_variant: TfVariant = tf_variant
                .parse()
                .map_err(|e: strum::ParseError| parse_error(format!("{tf_variant:?}: {e}")))?;
            let smooth_idf: bool = smooth_idf
                .parse()
                .map_err(|e: core::str::ParseBoolError| parse_error(e.to_string()))?;
            Some((tf_variant, smooth_idf))
        }
        _ => return Err(parse_error(format!("malformed policy line {policy_line:?}"))),
    };
    let columns = if tf_idf_options.is_some() { 3 } else { 2 };

    // `token_count` is untrusted; grow as lines arrive.
    let mut tokens = Vec::new();
    let mut document_frequency = Vec::new();

    for idx in 0..token_count {
        let line = next_line("token")?;
        let parts = line.split(' ').collect::<Vec<&str>>();
        if parts.len() != columns {
            return Err(parse_error(format!(
                "token line {}: expected {columns} fields, found {}",
                idx + 1,
                parts.len()
            )));
        }

        let bytes = BASE64_STANDARD
            .decode(parts[0])
            .map_err(|e| parse_error(e.to_string()))?;
        let token = String::from_utf8(bytes).map_err(|e| parse_error(e.to_string()))?;

        let id: usize = parse_int(parts[1])?;
        if id != idx + 1 {
            return Err(WordgridError::VocabConflict(format!(
                "token {token:?} has id {id}; expected {}",
                idx + 1
            )));
        }

        if columns == 3 {
            document_frequency.push(parse_int(parts[2])?);
        }
        tokens.push(token);
    }

    if let Some(extra) = lines.find_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        other => Some(other),
    }) {
        let extra = extra?;
        return Err(parse_error(format!("trailing content {extra:?}")));
    }

    let policy = match tf_idf_options {
        None if policy_fields[0] == "ordinal" => PolicyState::Ordinal,
        None => PolicyState::Presence,
        Some((tf_variant, smooth_idf)) => PolicyState::TfIdf {
            tf_variant,
            smooth_idf,
            document_count,
            document_frequency,
        },
    };

    let state = EncoderState { tokens, policy };
    state.validate()?;
    Ok(state)
}

fn parse_error(msg: String) -> WordgridError {
    WordgridError::Parse(msg)
}

fn parse_int<N>(field: &str) -> WGResult<N>
where
    N: core::str::FromStr<Err = core::num::ParseIntError>,
{
    field
        .parse()
        .map_err(|e: core::num::ParseIntError| parse_error(format!("{field:?}: {e}")))
}

fn keyed_fields<'a>(
    line: &'a str,
    key: &str,
) -> WGResult<Vec<&'a str>> {
    let mut parts = line.split_whitespace();
    if parts.next() != Some(key) {
        return Err(parse_error(format!("expected {key} line, found {line:?}")));
    }
    Ok(parts.collect())
}

fn single_field<'a>(
    line: &'a str,
    key: &str,
) -> WGResult<&'a str> {
    match keyed_fields(line, key)?.as_slice() {
        [value] => Ok(value),
        _ => Err(parse_error(format!("malformed {key} line {line:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tf_idf_state() -> EncoderState {
        EncoderState {
            tokens: vec!["G".into(), "a b".into(), "ünï".into()],
            policy: PolicyState::TfIdf {
                tf_variant: TfVariant::TermFrequency,
                smooth_idf: false,
                document_count: 4,
                document_frequency: vec![4, 1, 2],
            },
        }
    }

    #[test]
    fn test_write_layout() {
        let mut buf = Vec::new();
        write_text_state(&tf_idf_state(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "wordgrid-state 1");
        assert_eq!(lines[1], "policy tf-idf term-frequency false");
        assert_eq!(lines[2], "documents 4");
        assert_eq!(lines[3], "tokens 3");
        assert_eq!(lines[4], "Rw== 1 4");
        assert_eq!(lines[5], "YSBi 2 1");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_read_back() {
        let state = tf_idf_state();
        let mut buf = Vec::new();
        write_text_state(&state, &mut buf).unwrap();
        assert_eq!(read_text_state(buf.as_slice()).unwrap(), state);

        let state = EncoderState {
            tokens: vec!["x".into()],
            policy: PolicyState::Presence,
        };
        let mut buf = Vec::new();
        write_text_state(&state, &mut buf).unwrap();
        assert_eq!(read_text_state(buf.as_slice()).unwrap(), state);
    }

    #[test]
    fn test_rejects_malformed() {
        let cases = [
            "",
            "wordgrid-state 2\npolicy ordinal\ndocuments 0\ntokens 0\n",
            "wordgrid-state 1\npolicy bogus\ndocuments 0\ntokens 0\n",
            "wordgrid-state 1\npolicy ordinal\ndocuments 2\ntokens 0\n",
            "wordgrid-state 1\npolicy ordinal\ndocuments 0\ntokens 2\neA== 1\n",
            "wordgrid-state 1\npolicy ordinal\ndocuments 0\ntokens 1\neA== 2\n",
            "wordgrid-state 1\npolicy ordinal\ndocuments 0\ntokens 1\n!!!! 1\n",
            "wordgrid-state 1\npolicy ordinal\ndocuments 0\ntokens 1\neA== 1\neQ== 2\n",
            "wordgrid-state 1\npolicy tf-idf binary true\ndocuments 1\ntokens 1\neA== 1\n",
            "wordgrid-state 1\npolicy tf-idf binary true\ndocuments 1\ntokens 1\neA== 1 2\n",
            "wordgrid-state 1\npolicy ordinal\ndocuments 0\ntokens 18446744073709551615\n",
            "wordgrid-state 1\npolicy ordinal\ndocuments 0\ntokens 100000000000\neA== 1\n",
            "wordgrid-state 1\npolicy ordinal\ndocuments 0\ntokens 18446744073709551616\n",
        ];
        for case in cases {
            assert!(read_text_state(case.as_bytes()).is_err(), "{case:?}");
        }
    }

    #[test]
    fn test_empty_dictionary() {
        let text = "wordgrid-state 1\npolicy tf-idf raw-count true\ndocuments 0\ntokens 0\n";
        let state = read_text_state(text.as_bytes()).unwrap();
        assert!(state.is_empty());
        assert_eq!(
            state.policy,
            PolicyState::TfIdf {
                tf_variant: TfVariant::RawCount,
                smooth_idf: true,
                document_count: 0,
                document_frequency: vec![],
            }
        );
    }
}

//! # Delimiter-Set Tokenizer

use crate::tokenizers::StringTokenizer;

/// Splits a sequence on any character from a delimiter set.
///
/// Runs of delimiters are a single separator, so no empty tokens are
/// produced. Matching is case-sensitive. With an empty delimiter set the
/// whole remaining sequence is one token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitByAnyOf {
    delimiters: Vec<char>,
}

impl SplitByAnyOf {
    /// Build a tokenizer from every character of `delimiters`.
    ///
    /// ## Arguments
    /// * `delimiters` - The delimiter characters, e.g. `" ,."`.
    pub fn new<S: AsRef<str>>(delimiters: S) -> Self {
        let mut chars: Vec<char> = delimiters.as_ref().chars().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { delimiters: chars }
    }

    /// The configured delimiters, sorted and deduplicated.
    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }

    fn is_delimiter(
        &self,
        c: char,
    ) -> bool {
        self.delimiters.binary_search(&c).is_ok()
    }
}

impl StringTokenizer for SplitByAnyOf {
    fn next_token<'a>(
        &self,
        cursor: &mut &'a str,
    ) -> Option<&'a str> {
        let rest = cursor.trim_start_matches(|c| self.is_delimiter(c));
        if rest.is_empty() {
            *cursor = rest;
            return None;
        }

        let end = rest
            .find(|c| self.is_delimiter(c))
            .unwrap_or(rest.len());

        let (token, tail) = rest.split_at(end);
        *cursor = tail;
        Some(token)
    }
}

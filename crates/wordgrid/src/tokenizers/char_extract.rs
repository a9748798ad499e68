//! # Character Tokenizer

use crate::tokenizers::StringTokenizer;

/// Yields every character of a sequence as its own token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharExtract;

impl StringTokenizer for CharExtract {
    fn next_token<'a>(
        &self,
        cursor: &mut &'a str,
    ) -> Option<&'a str> {
        let c = cursor.chars().next()?;
        let (token, tail) = cursor.split_at(c.len_utf8());
        *cursor = tail;
        Some(token)
    }
}

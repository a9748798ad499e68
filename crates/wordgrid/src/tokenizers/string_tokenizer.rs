//! # String Tokenizer Trait

/// A cursor-driven tokenizer over a single input sequence.
///
/// Implementations hold no per-sequence state; the cursor is the only thing
/// that advances, so one tokenizer may be reused across sequences and threads.
pub trait StringTokenizer: Send + Sync {
    /// Extract the next token, advancing `cursor` past it.
    ///
    /// ## Arguments
    /// * `cursor` - The unconsumed remainder of the sequence.
    ///
    /// ## Returns
    /// The next token, or `None` once the sequence is exhausted.
    fn next_token<'a>(
        &self,
        cursor: &mut &'a str,
    ) -> Option<&'a str>;

    /// Iterate over all tokens of `text`, in order.
    fn tokens<'a>(
        &'a self,
        text: &'a str,
    ) -> TokenIter<'a, Self>
    where
        Self: Sized,
    {
        TokenIter {
            tokenizer: self,
            cursor: text,
        }
    }

    /// Collect all tokens of `text` into a vector.
    fn tokenize<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        let mut cursor = text;
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token(&mut cursor) {
            tokens.push(token);
        }
        tokens
    }
}

impl<K: StringTokenizer + ?Sized> StringTokenizer for &K {
    fn next_token<'a>(
        &self,
        cursor: &mut &'a str,
    ) -> Option<&'a str> {
        (**self).next_token(cursor)
    }
}

/// Iterator over the tokens of one sequence.
///
/// See: [`StringTokenizer::tokens`].
#[derive(Debug, Clone)]
pub struct TokenIter<'a, K: StringTokenizer> {
    tokenizer: &'a K,
    cursor: &'a str,
}

impl<'a, K: StringTokenizer> Iterator for TokenIter<'a, K> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokenizer.next_token(&mut self.cursor)
    }
}

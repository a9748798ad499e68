//! # Token Dictionary ``{ token <-> T }``

use compact_str::CompactString;

use crate::{
    errors::{WGResult, WordgridError},
    types::{TokenType, WGHashMap, hash_map_with_capacity},
};

/// `{ token -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_map`, or `token_id_map`.
pub type TokenIdMap<T> = WGHashMap<CompactString, T>;

/// Insertion-ordered, bidirectional ``{ token <-> T }`` dictionary.
///
/// Ids are dense: a dictionary of `N` tokens binds exactly the ids `1..=N`,
/// in first-insertion order. Id `0` is reserved for "absent" and padding.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDictionary<T: TokenType> {
    /// Map of ``{ token -> T }``.
    token_map: TokenIdMap<T>,

    /// Tokens ordered by id; `tokens[id - 1]`.
    tokens: Vec<CompactString>,
}

impl<T: TokenType> Default for TokenDictionary<T> {
    fn default() -> Self {
        Self {
            token_map: Default::default(),
            tokens: Vec::new(),
        }
    }
}

impl<T: TokenType> TokenDictionary<T> {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a dictionary from an id-ordered token list.
    ///
    /// The token at position `i` is bound to id `i + 1`.
    ///
    /// ## Arguments
    /// * `tokens` - The tokens, ordered by ascending id.
    ///
    /// ## Returns
    /// The dictionary, or an error on duplicate or empty tokens,
    /// or if the list does not fit in `T`.
    pub fn from_tokens<I, S>(tokens: I) -> WGResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens.into_iter();
        let mut dict = Self {
            token_map: hash_map_with_capacity(tokens.size_hint().0),
            tokens: Vec::with_capacity(tokens.size_hint().0),
        };

        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                return Err(WordgridError::VocabConflict(format!(
                    "empty token at id {}",
                    dict.len() + 1
                )));
            }
            if dict.has_token(token) {
                return Err(WordgridError::VocabConflict(format!(
                    "duplicate token {token:?} at id {}",
                    dict.len() + 1
                )));
            }
            dict.ensure_token(token)?;
        }

        Ok(dict)
    }

    /// The number of tokens in the dictionary.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Return the id for `token`, inserting it with the next id if unknown.
    ///
    /// Insertion is idempotent: a known token keeps its id and
    /// the dictionary does not grow.
    ///
    /// ## Arguments
    /// * `token` - The token to look up or insert.
    ///
    /// ## Returns
    /// The token's id, or [`WordgridError::VocabSizeOverflow`] if
    /// the next id does not fit in `T`.
    pub fn ensure_token(
        &mut self,
        token: &str,
    ) -> WGResult<T> {
        if let Some(&id) = self.token_map.get(token) {
            return Ok(id);
        }

        let size = self.tokens.len() + 1;
        let id = T::from_usize(size).ok_or(WordgridError::VocabSizeOverflow { size })?;

        let token = CompactString::from(token);
        self.token_map.insert(token.clone(), id);
        self.tokens.push(token);

        Ok(id)
    }

    /// Return the id for `token`, or `0` if it is not in the dictionary.
    pub fn value(
        &self,
        token: &str,
    ) -> T {
        self.get(token).unwrap_or_else(T::zero)
    }

    /// Return the id for `token`, if any.
    pub fn get(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_map.get(token).copied()
    }

    /// Returns true if `token` is in the dictionary.
    pub fn has_token(
        &self,
        token: &str,
    ) -> bool {
        self.token_map.contains_key(token)
    }

    /// Reverse lookup of the token bound to `id`.
    ///
    /// ## Returns
    /// The token, or `None` for the reserved id `0` and unbound ids.
    pub fn token(
        &self,
        id: T,
    ) -> Option<&str> {
        let idx = id.to_usize()?.checked_sub(1)?;
        self.tokens.get(idx).map(|t| t.as_str())
    }

    /// Tokens ordered by ascending id.
    pub fn tokens(&self) -> &[CompactString] {
        &self.tokens
    }

    /// The unordered ``{ token -> T }`` association.
    pub fn mapping(&self) -> &TokenIdMap<T> {
        &self.token_map
    }

    /// Iterate over ``(token, id)`` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.tokens
            .iter()
            .map(|token| (token.as_str(), self.token_map[token]))
    }

    /// Remove every token.
    pub fn clear(&mut self) {
        self.token_map.clear();
        self.tokens.clear();
    }

    /// Drop every token with an id greater than `len`.
    pub(crate) fn truncate(
        &mut self,
        len: usize,
    ) {
        if len >= self.tokens.len() {
            return;
        }
        for token in self.tokens.drain(len..) {
            self.token_map.remove(&token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WGHashSet;

    #[test]
    fn test_ensure_token_is_idempotent() {
        type T = u32;
        let mut dict = TokenDictionary::<T>::new();
        assert!(dict.is_empty());

        assert_eq!(dict.ensure_token("apple").unwrap(), 1);
        assert_eq!(dict.ensure_token("banana").unwrap(), 2);
        assert_eq!(dict.len(), 2);

        assert_eq!(dict.ensure_token("apple").unwrap(), 1);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_lookup_miss_is_zero() {
        type T = u16;
        let mut dict = TokenDictionary::<T>::new();
        dict.ensure_token("a").unwrap();

        assert_eq!(dict.value("a"), 1);
        assert_eq!(dict.value("b"), 0);
        assert_eq!(dict.get("b"), None);
        assert!(dict.has_token("a"));
        assert!(!dict.has_token("A"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_ids_are_dense() {
        type T = u64;
        let mut dict = TokenDictionary::<T>::new();
        for token in "the quick brown fox jumps over the lazy dog the end".split(' ') {
            dict.ensure_token(token).unwrap();
        }

        let n = dict.len();
        assert_eq!(n, 9);
        assert_eq!(dict.mapping().len(), n);

        let ids: WGHashSet<T> = dict.mapping().values().copied().collect();
        let expected: WGHashSet<T> = (1..=n as T).collect();
        assert_eq!(ids, expected);

        for (idx, (token, id)) in dict.iter().enumerate() {
            assert_eq!(id as usize, idx + 1);
            assert_eq!(dict.token(id), Some(token));
            assert_eq!(dict.tokens()[idx], token);
        }
    }

    #[test]
    fn test_reverse_lookup() {
        type T = u32;
        let dict = TokenDictionary::<T>::from_tokens(["G", "A", "C"]).unwrap();

        assert_eq!(dict.token(0), None);
        assert_eq!(dict.token(1), Some("G"));
        assert_eq!(dict.token(3), Some("C"));
        assert_eq!(dict.token(4), None);
    }

    #[test]
    fn test_from_tokens_rejects_bad_lists() {
        type T = u32;
        assert!(matches!(
            TokenDictionary::<T>::from_tokens(["a", "b", "a"]),
            Err(WordgridError::VocabConflict(_))
        ));
        assert!(matches!(
            TokenDictionary::<T>::from_tokens(["a", ""]),
            Err(WordgridError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_overflow() {
        type T = u8;
        let mut dict = TokenDictionary::<T>::new();
        for i in 0..255 {
            dict.ensure_token(&i.to_string()).unwrap();
        }
        assert_eq!(dict.value("254"), 255);

        assert!(matches!(
            dict.ensure_token("one-too-many"),
            Err(WordgridError::VocabSizeOverflow { size: 256 })
        ));
        assert_eq!(dict.len(), 255);

        // Known tokens still resolve at capacity.
        assert_eq!(dict.ensure_token("0").unwrap(), 1);
    }

    #[test]
    fn test_truncate_and_clear() {
        type T = u32;
        let mut dict = TokenDictionary::<T>::from_tokens(["a", "b", "c", "d"]).unwrap();

        dict.truncate(2);
        assert_eq!(dict.len(), 2);
        assert!(!dict.has_token("c"));
        assert_eq!(dict.ensure_token("e").unwrap(), 3);

        dict.clear();
        assert!(dict.is_empty());
        assert!(dict.mapping().is_empty());
        assert_eq!(dict.ensure_token("z").unwrap(), 1);
    }
}

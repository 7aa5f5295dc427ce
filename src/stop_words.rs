//! Stop-word set: words removed from documents and queries before
//! indexing/matching.

use crate::error::SearchError;
use crate::tokenizer::is_valid_word;
use std::collections::BTreeSet;

/// An ordered set of non-empty, control-character-free words ignored
/// during indexing and querying.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// An empty stop-word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a stop-word set from a whitespace-separated string.
    ///
    /// Empty tokens are silently dropped. Any token that fails
    /// [`is_valid_word`] aborts construction with
    /// [`SearchError::InvalidArgument`].
    pub fn from_str(text: &str) -> Result<Self, SearchError> {
        Self::from_iter(text.split(' ').filter(|w| !w.is_empty()))
    }

    /// Builds a stop-word set from any iterable of strings.
    ///
    /// Empty strings are silently dropped; invalid words are rejected.
    pub fn from_iter<I, S>(words: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(word) {
                return Err(SearchError::InvalidArgument(format!(
                    "stop word {:?} contains a control character",
                    word
                )));
            }
            set.insert(word.to_string());
        }
        Ok(Self { words: set })
    }

    /// Adds words to this set after construction.
    ///
    /// Note: this does **not** retroactively strip already-indexed
    /// occurrences of the newly added words from any
    /// [`crate::index::InvertedIndex`] built before the call — see
    /// `SPEC_FULL.md` §9. Prefer configuring stop words before the first
    /// `add_document` call.
    pub fn extend<I, S>(&mut self, words: I) -> Result<(), SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = Self::from_iter(words)?;
        self.words.extend(extra.words);
        Ok(())
    }

    /// Returns `true` if `word` is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set has no stop words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whitespace_separated_string() {
        let sw = StopWords::from_str("in the and").unwrap();
        assert_eq!(sw.len(), 3);
        assert!(sw.contains("in"));
        assert!(sw.contains("the"));
        assert!(!sw.contains("cat"));
    }

    #[test]
    fn drops_empty_tokens() {
        let sw = StopWords::from_str("  in   the ").unwrap();
        assert_eq!(sw.len(), 2);
    }

    #[test]
    fn rejects_control_characters() {
        assert!(StopWords::from_iter(vec!["ba\u{0001}d"]).is_err());
    }

    #[test]
    fn from_iter_accepts_owned_strings() {
        let sw = StopWords::from_iter(vec!["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(sw.len(), 2);
    }
}

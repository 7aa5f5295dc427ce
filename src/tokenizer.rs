//! Whitespace tokenizer and word-validity rule.
//!
//! Splits on ASCII space into maximal non-empty runs. Tokenization never
//! removes stop words — that is a separate pass, see [`crate::stop_words`].

use crate::error::SearchError;

/// Returns `true` if `word` contains no character whose code point is less
/// than `0x20` (a control character).
///
/// This is the single word-validity rule shared by documents, stop words,
/// and query tokens.
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| (c as u32) < 0x20)
}

/// Splits `text` on ASCII spaces into maximal non-empty runs and checks
/// every resulting word against [`is_valid_word`].
///
/// # Errors
///
/// Returns [`SearchError::InvalidArgument`] naming the first invalid word
/// found.
pub fn tokenize(text: &str) -> Result<Vec<&str>, SearchError> {
    let words: Vec<&str> = text.split(' ').filter(|w| !w.is_empty()).collect();
    for word in &words {
        if !is_valid_word(word) {
            return Err(SearchError::InvalidArgument(format!(
                "word {:?} contains a control character",
                word
            )));
        }
    }
    Ok(words)
}

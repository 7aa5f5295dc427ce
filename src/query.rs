//! Query parsing: turns a raw query string into positive and negative term
//! sets.

use crate::error::SearchError;
use crate::stop_words::StopWords;

/// A single parsed query token, before it is sorted into the plus or minus
/// bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWord {
    pub text: String,
    pub is_minus: bool,
    pub is_stop: bool,
}

/// A parsed query: positive terms to score, negative terms that exclude a
/// document outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Positive terms, in parse order. May contain duplicates; callers that
    /// need a set (the scorer) deduplicate separately.
    pub plus_words: Vec<String>,
    /// Negative terms, in parse order. Never deduplicated — every
    /// occurrence drives the same exclusion.
    pub minus_words: Vec<String>,
}

/// Parses one whitespace-delimited token, stripping a leading `-` and
/// classifying it.
///
/// # Errors
///
/// Returns [`SearchError::InvalidArgument`] if, after stripping at most one
/// leading `-`, the token is empty, still begins with `-` (the original
/// had `--`), ends with `-`, or contains a control character.
fn parse_query_word(token: &str, stop_words: &StopWords) -> Result<QueryWord, SearchError> {
    let (is_minus, stripped) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    if stripped.is_empty()
        || stripped.starts_with('-')
        || stripped.ends_with('-')
        || !crate::tokenizer::is_valid_word(stripped)
    {
        return Err(SearchError::InvalidArgument(format!(
            "query word {:?} is invalid",
            token
        )));
    }

    Ok(QueryWord {
        is_stop: stop_words.contains(stripped),
        text: stripped.to_string(),
        is_minus,
    })
}

/// Parses a raw query string into a [`Query`].
///
/// Rules, applied per whitespace-delimited token, in order:
/// 1. Tokenize on ASCII space.
/// 2. A leading `-` marks the token as a minus term and is stripped.
/// 3. The stripped token must be non-empty, must not itself start or end
///    with `-`, and must contain no control character.
/// 4. A stripped token found in `stop_words` is discarded — it produces
///    neither a plus nor a minus term.
/// 5. Otherwise the token is placed in the plus or minus bucket.
///
/// # Errors
///
/// Returns [`SearchError::InvalidArgument`] if `raw` is empty (after
/// trimming has no bearing — an all-whitespace string tokenizes to zero
/// words, which is also rejected) or if any token fails rule 3.
pub fn parse_query(raw: &str, stop_words: &StopWords) -> Result<Query, SearchError> {
    let tokens: Vec<&str> = raw.split(' ').filter(|w| !w.is_empty()).collect();
    if tokens.is_empty() {
        return Err(SearchError::InvalidArgument(
            "query must not be empty".to_string(),
        ));
    }

    let mut query = Query::default();
    for token in tokens {
        let word = parse_query_word(token, stop_words)?;
        if word.is_stop {
            continue;
        }
        if word.is_minus {
            query.minus_words.push(word.text);
        } else {
            query.plus_words.push(word.text);
        }
    }
    Ok(query)
}

//! Document matching: which of a query's positive terms a specific
//! document contains, short-circuited by any present minus term.

use crate::error::SearchError;
use crate::index::{DocumentStatus, InvertedIndex};
use crate::query::parse_query;
use crate::scorer::ExecutionPolicy;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Matches `raw_query` against document `id`.
///
/// If any minus word is present in the document, the match is empty: an
/// empty word list paired with the document's status. Otherwise the
/// result is the sorted, deduplicated set of positive query terms the
/// document actually contains (which may itself be empty).
///
/// Sequential and parallel differ only in how the plus-word membership
/// checks are performed; both raise the same error for an unknown id.
///
/// # Errors
///
/// Returns [`SearchError::InvalidArgument`] for a malformed query and
/// [`SearchError::OutOfRange`] if `id` does not name a live document.
pub fn match_document(
    index: &InvertedIndex,
    raw_query: &str,
    id: u32,
    policy: ExecutionPolicy,
) -> Result<(Vec<String>, DocumentStatus), SearchError> {
    let query = parse_query(raw_query, index.stop_words())?;
    let data = index.document_data(id).ok_or_else(|| {
        SearchError::OutOfRange(format!("document {id} is not in the index"))
    })?;
    let words = index.words_of(id);

    let contains = |word: &String| words.is_some_and(|w| w.contains_key(word));

    let has_minus = match policy {
        ExecutionPolicy::Sequential => query.minus_words.iter().any(contains),
        ExecutionPolicy::Parallel => query.minus_words.par_iter().any(contains),
    };
    if has_minus {
        return Ok((Vec::new(), data.status));
    }

    let matched: BTreeSet<String> = match policy {
        ExecutionPolicy::Sequential => query
            .plus_words
            .iter()
            .filter(|w| contains(w))
            .cloned()
            .collect(),
        ExecutionPolicy::Parallel => query
            .plus_words
            .par_iter()
            .filter(|w| contains(w))
            .cloned()
            .collect(),
    };

    Ok((matched.into_iter().collect(), data.status))
}

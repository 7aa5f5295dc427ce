//! Error types for tfidf-search.

use std::fmt;

/// Errors that can occur during indexing, querying, or matching.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A caller-supplied argument violated a precondition: a negative or
    /// already-present document id, a control character in document or
    /// query text, or a malformed query token (`--x`, `x-`, empty after
    /// stripping a leading `-`).
    InvalidArgument(String),
    /// An index or id was outside the valid range: `document_id_at` past
    /// the end of insertion order, or `match_document` for an id that was
    /// never added (or has since been removed).
    OutOfRange(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            SearchError::OutOfRange(msg) => write!(f, "out of range: {}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

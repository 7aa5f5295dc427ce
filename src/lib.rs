//! In-memory TF-IDF document search.
//!
//! This crate provides an inverted-index search engine: documents are
//! tokenized, indexed under term frequencies, and queried with a
//! plus/minus term syntax (`cat -dog`) scored by TF-IDF. It is designed
//! for small-to-medium in-memory corpora — prototyping, embedded search
//! over a known document set, exercises — not as a replacement for a
//! full-text search server.
//!
//! # Design Philosophy
//!
//! **Key characteristics:**
//! - In-memory index (no persistence)
//! - Exactly one scoring model (TF-IDF; no BM25, no vector search)
//! - A writer/reader split enforced at the type level: mutation
//!   ([`InvertedIndex::add_document`], [`InvertedIndex::remove_document`])
//!   takes `&mut self`; querying ([`scorer::find_top`],
//!   [`matcher::match_document`]) takes `&self`, so concurrent readers
//!   and a single writer can never alias unsafely without the compiler
//!   noticing.
//! - Two execution policies for querying — [`ExecutionPolicy::Sequential`]
//!   and [`ExecutionPolicy::Parallel`] — that are required to agree on
//!   every query.
//!
//! **Boundaries:**
//! - Indexing, querying, matching, deduplication, pagination
//! - Not included: persistence, networked access, stemming or
//!   Unicode-aware tokenization, phrase/proximity queries, distributed
//!   execution (see each module's docs for the precise Non-goals).
//!
//! # Quick Start
//!
//! ```rust
//! use tfidf_search::prelude::*;
//!
//! let mut index = InvertedIndex::with_stop_words_str("and in on").unwrap();
//! index
//!     .add_document(0, "a cat and a dog live on the street", DocumentStatus::Actual, &[5])
//!     .unwrap();
//! index
//!     .add_document(1, "a dog sleeps in the park", DocumentStatus::Actual, &[3])
//!     .unwrap();
//!
//! let results = find_top_actual(&index, "cat dog -park", ExecutionPolicy::Sequential).unwrap();
//! assert_eq!(results[0].id, 0);
//! ```

/// Error types for indexing, querying, and matching.
pub mod error;

/// Splits document and query text into words, rejecting control
/// characters.
pub mod tokenizer;

/// The stop-word set shared by indexing and query parsing.
pub mod stop_words;

/// Parses a raw query string into plus and minus term buckets.
pub mod query;

/// The inverted index and corpus manager — the crate's one mutable
/// structure.
pub mod index;

/// A fixed-shard concurrent map used by the parallel scorer and matcher.
pub mod accumulator;

/// TF-IDF scoring: `find_top` and its status-filtered convenience
/// wrappers.
pub mod scorer;

/// Per-document query matching.
pub mod matcher;

/// Duplicate-document detection and removal.
pub mod duplicates;

/// Splits a result slice into fixed-size pages.
pub mod pagination;

/// A rolling window over the last [`request_window::MIN_IN_DAY`] queries.
pub mod request_window;

pub use error::SearchError;

/// Maximum number of documents [`scorer::find_top`] returns, per
/// `spec.md` §4.5.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Tolerance used when comparing two relevance scores for ordering
/// purposes, per `spec.md` §4.5.
pub const EPSILON: f64 = 1e-6;

/// Re-exports of the crate's primary public surface.
pub mod prelude {
    pub use crate::error::SearchError;
    pub use crate::index::{Document, DocumentStatus, InvertedIndex};
    pub use crate::scorer::{find_top, find_top_actual, find_top_with_status, ExecutionPolicy};
    pub use crate::matcher::match_document;
    pub use crate::duplicates::remove_duplicates;
    pub use crate::pagination::{paginate, Page, Paginator};
    pub use crate::request_window::RequestWindow;
    pub use crate::stop_words::StopWords;
    pub use crate::{EPSILON, MAX_RESULT_DOCUMENT_COUNT};
}

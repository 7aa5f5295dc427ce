//! Inverted index and corpus manager.
//!
//! Owns the forward and inverted postings maps, per-document metadata, and
//! insertion order. This is the single mutable structure in the crate;
//! every other module (scorer, matcher, duplicates) reads it through a
//! shared reference.

use crate::error::SearchError;
use crate::stop_words::StopWords;
use crate::tokenizer::tokenize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A ranked search result. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Document {
    pub id: u32,
    pub relevance: f64,
    pub rating: i32,
}

/// Lifecycle status of a document, set at ingest and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentStatus {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// Per-document metadata stored alongside the postings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// The inverted index and corpus manager.
///
/// # Invariants
///
/// - For every `(w, d)` in `word_to_docs`, `d` is a key of `documents` and
///   `word_to_docs[w][d] == doc_to_words[d][w]`.
/// - For a live document `d` with surviving token count `n`, the term
///   frequencies of `d` in `doc_to_words[d]` sum to `1.0` within
///   [`EPSILON`].
/// - `documents.len() == document_ids.len()`.
/// - No stop word appears as a key of `word_to_docs`.
pub struct InvertedIndex {
    stop_words: StopWords,
    word_to_docs: HashMap<String, BTreeMap<u32, f64>>,
    doc_to_words: HashMap<u32, BTreeMap<String, f64>>,
    documents: HashMap<u32, DocumentData>,
    document_ids: BTreeSet<u32>,
    insertion_order: Vec<u32>,
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl InvertedIndex {
    /// An empty index with no stop words.
    pub fn new() -> Self {
        Self {
            stop_words: StopWords::new(),
            word_to_docs: HashMap::new(),
            doc_to_words: HashMap::new(),
            documents: HashMap::new(),
            document_ids: BTreeSet::new(),
            insertion_order: Vec::new(),
        }
    }

    /// An empty index whose stop words are parsed from a single
    /// whitespace-separated string.
    pub fn with_stop_words_str(stop_words: &str) -> Result<Self, SearchError> {
        Ok(Self {
            stop_words: StopWords::from_str(stop_words)?,
            ..Self::new()
        })
    }

    /// An empty index whose stop words come from any iterable of strings.
    pub fn with_stop_words<I, S>(stop_words: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            stop_words: StopWords::from_iter(stop_words)?,
            ..Self::new()
        })
    }

    /// Adds more stop words after construction.
    ///
    /// Does not retroactively strip already-indexed occurrences of the
    /// newly added words — see `SPEC_FULL.md` §9 and
    /// [`StopWords::extend`].
    pub fn set_stop_words<I, S>(&mut self, words: I) -> Result<(), SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words.extend(words)
    }

    pub(crate) fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Adds a document to the index.
    ///
    /// `id` is accepted as `i64` at this boundary so a negative id can be
    /// rejected with [`SearchError::InvalidArgument`] rather than silently
    /// wrapping or panicking on an unsigned underflow; internally, and at
    /// every other API that already holds a validated id, documents are
    /// keyed by `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] if `id` is negative, does
    /// not fit in a `u32`, is already present, or if `text` contains a
    /// control character.
    pub fn add_document(
        &mut self,
        id: i64,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<(), SearchError> {
        let id = u32::try_from(id)
            .map_err(|_| SearchError::InvalidArgument(format!("document id {id} is negative or too large")))?;
        if self.documents.contains_key(&id) {
            return Err(SearchError::InvalidArgument(format!(
                "document {id} already exists"
            )));
        }

        let words: Vec<String> = tokenize(text)?
            .into_iter()
            .filter(|w| !self.stop_words.contains(w))
            .map(|w| w.to_string())
            .collect();

        let tf = if words.is_empty() {
            0.0
        } else {
            1.0 / words.len() as f64
        };

        let mut doc_words: BTreeMap<String, f64> = BTreeMap::new();
        for word in words {
            *doc_words.entry(word).or_insert(0.0) += tf;
        }
        for (word, freq) in &doc_words {
            *self
                .word_to_docs
                .entry(word.clone())
                .or_default()
                .entry(id)
                .or_insert(0.0) += freq;
        }

        self.doc_to_words.insert(id, doc_words);
        self.documents.insert(
            id,
            DocumentData {
                rating: average_rating(ratings),
                status,
            },
        );
        self.document_ids.insert(id);
        self.insertion_order.push(id);
        Ok(())
    }

    /// Removes a document from the index, if present. A no-op for an
    /// absent id.
    pub fn remove_document(&mut self, id: u32) {
        if !self.document_ids.remove(&id) {
            return;
        }
        self.documents.remove(&id);
        if let Some(words) = self.doc_to_words.remove(&id) {
            for word in words.keys() {
                if let Some(postings) = self.word_to_docs.get_mut(word) {
                    postings.remove(&id);
                    if postings.is_empty() {
                        self.word_to_docs.remove(word);
                    }
                }
            }
        }
        // `insertion_order` is deliberately left untouched — see
        // `SPEC_FULL.md` §9.
    }

    /// Number of live documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// The id that was inserted at position `index` in insertion order.
    ///
    /// Because `insertion_order` is never pruned, the returned id may have
    /// since been removed — callers that need a guaranteed-live id should
    /// check [`Self::contains`] or go through [`Self::iter_ids`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::OutOfRange`] if `index >= insertion_order.len()`.
    pub fn document_id_at(&self, index: usize) -> Result<u32, SearchError> {
        self.insertion_order.get(index).copied().ok_or_else(|| {
            SearchError::OutOfRange(format!(
                "insertion index {index} out of range (0..{})",
                self.insertion_order.len()
            ))
        })
    }

    /// Returns `true` if `id` is currently a live document.
    pub fn contains(&self, id: u32) -> bool {
        self.documents.contains_key(&id)
    }

    /// The per-document term-frequency mapping for `id`, or an empty map
    /// if `id` is absent.
    ///
    /// The returned view borrows from the index; any subsequent call to
    /// `add_document`, `remove_document`, or `set_stop_words` invalidates
    /// it (enforced by the borrow checker).
    pub fn word_frequencies(&self, id: u32) -> BTreeMap<&str, f64> {
        match self.doc_to_words.get(&id) {
            Some(words) => words.iter().map(|(w, &f)| (w.as_str(), f)).collect(),
            None => BTreeMap::new(),
        }
    }

    /// Lazy, ascending-id enumeration of current document ids.
    pub fn iter_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.document_ids.iter().copied()
    }

    pub(crate) fn document_data(&self, id: u32) -> Option<&DocumentData> {
        self.documents.get(&id)
    }

    pub(crate) fn postings_for(&self, word: &str) -> Option<&BTreeMap<u32, f64>> {
        self.word_to_docs.get(word)
    }

    pub(crate) fn words_of(&self, id: u32) -> Option<&BTreeMap<String, f64>> {
        self.doc_to_words.get(id)
    }
}

/// Integer truncation of the arithmetic mean; an empty list averages to 0.
fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}

//! TF-IDF scoring and retrieval: `find_top`, in both execution policies.

use crate::accumulator::{ConcurrentAccumulator, DEFAULT_SHARD_COUNT};
use crate::error::SearchError;
use crate::index::{Document, DocumentStatus, InvertedIndex};
use crate::query::parse_query;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Selects whether scoring/matching fans out across a worker pool or runs
/// on the caller's thread. Sequential and parallel runs on the same
/// corpus and query are required to return bit-identical results (within
/// [`EPSILON`](crate::EPSILON)) — see `spec.md` §5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionPolicy {
    Sequential,
    Parallel,
}

/// Computes `idf(w) = ln(document_count / df(w))`.
fn idf(document_count: usize, doc_frequency: usize) -> f64 {
    (document_count as f64 / doc_frequency as f64).ln()
}

/// Finds the top-scoring documents for `raw_query`, keeping only documents
/// for which `predicate(id, status, rating)` holds.
///
/// # Algorithm
///
/// 1. Parse the query (empty queries are rejected).
/// 2. Deduplicate and lexically sort the positive terms — this both
///    avoids double-scoring a repeated term and pins down the
///    reduction order the parallel policy must match.
/// 3. For each positive term present in the index, add `tf * idf` to the
///    accumulator for every document that contains it and satisfies
///    `predicate`.
/// 4. For every negative term, erase its documents from the accumulator
///    (even if they were never added).
/// 5. Drain the accumulator, sort by relevance descending (ties within
///    [`crate::EPSILON`] break on rating descending), and truncate to
///    [`crate::MAX_RESULT_DOCUMENT_COUNT`].
///
/// # Errors
///
/// Returns [`SearchError::InvalidArgument`] if `raw_query` is empty or
/// malformed.
pub fn find_top<F>(
    index: &InvertedIndex,
    raw_query: &str,
    policy: ExecutionPolicy,
    predicate: F,
) -> Result<Vec<Document>, SearchError>
where
    F: Fn(u32, DocumentStatus, i32) -> bool + Sync,
{
    let query = parse_query(raw_query, index.stop_words())?;

    let plus_words: BTreeSet<&str> = query.plus_words.iter().map(String::as_str).collect();
    let accumulator = ConcurrentAccumulator::new(DEFAULT_SHARD_COUNT);
    let document_count = index.document_count();

    let score_word = |word: &&str| {
        let Some(postings) = index.postings_for(word) else {
            return;
        };
        let weight = idf(document_count, postings.len());
        for (&id, &tf) in postings {
            let Some(data) = index.document_data(id) else {
                continue;
            };
            if predicate(id, data.status, data.rating) {
                accumulator.add(id, tf * weight);
            }
        }
    };

    let erase_word = |word: &String| {
        if let Some(postings) = index.postings_for(word) {
            for &id in postings.keys() {
                accumulator.erase(id);
            }
        }
    };

    match policy {
        ExecutionPolicy::Sequential => {
            plus_words.iter().for_each(score_word);
            query.minus_words.iter().for_each(erase_word);
        }
        ExecutionPolicy::Parallel => {
            plus_words.par_iter().for_each(score_word);
            query.minus_words.par_iter().for_each(erase_word);
        }
    }

    let mut results: Vec<Document> = accumulator
        .drain()
        .into_iter()
        .filter_map(|(id, relevance)| {
            index.document_data(id).map(|data| Document {
                id,
                relevance,
                rating: data.rating,
            })
        })
        .collect();

    sort_by_relevance_then_rating(&mut results);
    results.truncate(crate::MAX_RESULT_DOCUMENT_COUNT);
    Ok(results)
}

/// Convenience wrapper: keeps documents whose status equals `status`.
pub fn find_top_with_status(
    index: &InvertedIndex,
    raw_query: &str,
    policy: ExecutionPolicy,
    status: DocumentStatus,
) -> Result<Vec<Document>, SearchError> {
    find_top(index, raw_query, policy, |_, doc_status, _| {
        doc_status == status
    })
}

/// Convenience wrapper: defaults to `status == Actual`.
pub fn find_top_actual(
    index: &InvertedIndex,
    raw_query: &str,
    policy: ExecutionPolicy,
) -> Result<Vec<Document>, SearchError> {
    find_top_with_status(index, raw_query, policy, DocumentStatus::Actual)
}

fn sort_by_relevance_then_rating(docs: &mut [Document]) {
    docs.sort_by(|a, b| {
        if (a.relevance - b.relevance).abs() < crate::EPSILON {
            b.rating.cmp(&a.rating)
        } else {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(std::cmp::Ordering::Equal)
        }
    });
}

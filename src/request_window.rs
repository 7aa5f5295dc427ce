//! Rolling window over the most recent requests, used to count how many
//! of the last day's searches came back empty.

use crate::error::SearchError;
use crate::index::{Document, DocumentStatus, InvertedIndex};
use crate::scorer::{find_top, ExecutionPolicy};
use std::collections::VecDeque;

/// Number of requests the window remembers, per `spec.md` §4.9 ("a day",
/// one request per minute).
pub const MIN_IN_DAY: usize = 1440;

/// Wraps an [`InvertedIndex`] and remembers whether each of the last
/// [`MIN_IN_DAY`] searches returned at least one result.
pub struct RequestWindow<'a> {
    index: &'a InvertedIndex,
    was_empty: VecDeque<bool>,
}

impl<'a> RequestWindow<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self {
            index,
            was_empty: VecDeque::with_capacity(MIN_IN_DAY),
        }
    }

    /// Runs `raw_query` through [`find_top`] (sequential policy), filtering
    /// by `predicate`, and records whether the result set was empty.
    ///
    /// If the window already holds [`MIN_IN_DAY`] entries, the oldest is
    /// evicted first.
    pub fn add_find_request<F>(
        &mut self,
        raw_query: &str,
        predicate: F,
    ) -> Result<Vec<Document>, SearchError>
    where
        F: Fn(u32, DocumentStatus, i32) -> bool + Sync,
    {
        let results = find_top(self.index, raw_query, ExecutionPolicy::Sequential, predicate)?;
        if self.was_empty.len() >= MIN_IN_DAY {
            self.was_empty.pop_front();
        }
        self.was_empty.push_back(results.is_empty());
        Ok(results)
    }

    /// Number of requests currently in the window that returned no
    /// results.
    pub fn no_result_requests(&self) -> usize {
        self.was_empty.iter().filter(|&&empty| empty).count()
    }

    /// Number of requests currently remembered (at most [`MIN_IN_DAY`]).
    pub fn len(&self) -> usize {
        self.was_empty.len()
    }

    pub fn is_empty(&self) -> bool {
        self.was_empty.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_with_one_doc() -> InvertedIndex {
        let mut idx = InvertedIndex::new();
        idx.add_document(1, "cat", DocumentStatus::Actual, &[]).unwrap();
        idx
    }

    #[test]
    fn counts_empty_requests() {
        let idx = index_with_one_doc();
        let mut window = RequestWindow::new(&idx);
        window.add_find_request("cat", |_, s, _| s == DocumentStatus::Actual).unwrap();
        window.add_find_request("dog", |_, s, _| s == DocumentStatus::Actual).unwrap();
        window.add_find_request("dog", |_, s, _| s == DocumentStatus::Actual).unwrap();
        assert_eq!(window.len(), 3);
        assert_eq!(window.no_result_requests(), 2);
    }

    #[test]
    fn evicts_oldest_past_capacity() {
        let idx = index_with_one_doc();
        let mut window = RequestWindow::new(&idx);
        for _ in 0..MIN_IN_DAY {
            window.add_find_request("dog", |_, s, _| s == DocumentStatus::Actual).unwrap();
        }
        assert_eq!(window.no_result_requests(), MIN_IN_DAY);
        window.add_find_request("cat", |_, s, _| s == DocumentStatus::Actual).unwrap();
        assert_eq!(window.len(), MIN_IN_DAY);
        assert_eq!(window.no_result_requests(), MIN_IN_DAY - 1);
    }

    #[test]
    fn propagates_query_errors() {
        let idx = index_with_one_doc();
        let mut window = RequestWindow::new(&idx);
        assert!(window.add_find_request("", |_, _, _| true).is_err());
    }
}

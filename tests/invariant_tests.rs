//! Checks the invariants `SPEC_FULL.md` §3 and §8 claim hold over any
//! legal sequence of operations.

use tfidf_search::prelude::*;

#[test]
fn term_frequencies_sum_to_one_per_document() {
    let mut index = InvertedIndex::new();
    index
        .add_document(1, "the quick brown fox jumps over the lazy dog", DocumentStatus::Actual, &[])
        .unwrap();

    let sum: f64 = index.word_frequencies(1).values().sum();
    assert!((sum - 1.0).abs() < EPSILON);
}

#[test]
fn document_count_matches_live_id_set() {
    let mut index = InvertedIndex::new();
    for id in 0..5i64 {
        index.add_document(id, "word", DocumentStatus::Actual, &[]).unwrap();
    }
    assert_eq!(index.document_count(), index.iter_ids().count());
    index.remove_document(2);
    assert_eq!(index.document_count(), index.iter_ids().count());
    assert_eq!(index.document_count(), 4);
}

#[test]
fn stop_word_never_surfaces_in_match_or_score() {
    let mut index = InvertedIndex::with_stop_words_str("the").unwrap();
    index.add_document(1, "the cat sat", DocumentStatus::Actual, &[]).unwrap();

    let (words, _) = match_document(&index, "the cat", 1, ExecutionPolicy::Sequential).unwrap();
    assert_eq!(words, vec!["cat"]);

    assert!(index.word_absent_everywhere("the"));
}

trait StopWordAbsenceCheck {
    fn word_absent_everywhere(&self, word: &str) -> bool;
}

impl StopWordAbsenceCheck for InvertedIndex {
    fn word_absent_everywhere(&self, word: &str) -> bool {
        self.iter_ids().all(|id| !self.word_frequencies(id).contains_key(word))
    }
}

#[test]
fn minus_word_present_excludes_from_both_scoring_and_matching() {
    let mut index = InvertedIndex::new();
    index.add_document(1, "cat dog", DocumentStatus::Actual, &[]).unwrap();
    index.add_document(2, "cat bird", DocumentStatus::Actual, &[]).unwrap();

    let results = find_top_actual(&index, "cat -dog", ExecutionPolicy::Sequential).unwrap();
    assert_eq!(results.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2]);

    let (words, _) = match_document(&index, "cat -dog", 1, ExecutionPolicy::Sequential).unwrap();
    assert!(words.is_empty());
}

#[test]
fn add_then_remove_restores_prior_state() {
    let mut index = InvertedIndex::new();
    index.add_document(1, "alpha beta", DocumentStatus::Actual, &[]).unwrap();
    let count_before = index.document_count();

    index.add_document(2, "beta gamma", DocumentStatus::Actual, &[]).unwrap();
    index.remove_document(2);

    assert_eq!(index.document_count(), count_before);
    assert!(index.word_absent_everywhere("gamma"));
    assert_eq!(index.word_frequencies(1).len(), 2);
}

//! Sequential and parallel execution policies must agree.

use tfidf_search::prelude::*;

fn medium_corpus() -> InvertedIndex {
    let mut index = InvertedIndex::with_stop_words_str("a an the").unwrap();
    let docs = [
        ("the quick brown fox jumps over a lazy dog", [1, 2, 3].as_slice()),
        ("a quick brown dog outpaces a quick fox", &[4, 5]),
        ("the lazy dog sleeps all day in the sun", &[]),
        ("brown bears and quick foxes rarely meet", &[2, 2]),
        ("the sun is bright and the fox is fast", &[5, 5, 5]),
    ];
    for (i, (text, ratings)) in docs.iter().enumerate() {
        index.add_document(i as i64, text, DocumentStatus::Actual, ratings).unwrap();
    }
    index
}

#[test]
fn find_top_agrees_across_policies() {
    let index = medium_corpus();
    for query in ["quick fox", "brown -lazy", "sun fox dog", "quick brown fox -sleeps"] {
        let seq = find_top_actual(&index, query, ExecutionPolicy::Sequential).unwrap();
        let par = find_top_actual(&index, query, ExecutionPolicy::Parallel).unwrap();
        assert_eq!(seq.len(), par.len(), "query {query:?}");
        for (a, b) in seq.iter().zip(par.iter()) {
            assert_eq!(a.id, b.id, "query {query:?}");
            assert!((a.relevance - b.relevance).abs() < EPSILON, "query {query:?}");
            assert_eq!(a.rating, b.rating, "query {query:?}");
        }
    }
}

#[test]
fn match_document_agrees_across_policies() {
    let index = medium_corpus();
    for id in 0..5u32 {
        for query in ["quick fox", "brown -lazy", "sun fox dog -bears"] {
            let seq = match_document(&index, query, id, ExecutionPolicy::Sequential).unwrap();
            let par = match_document(&index, query, id, ExecutionPolicy::Parallel).unwrap();
            assert_eq!(seq, par, "id {id}, query {query:?}");
        }
    }
}

#[test]
fn match_document_unknown_id_is_out_of_range_in_both_policies() {
    let index = medium_corpus();
    assert!(matches!(
        match_document(&index, "fox", 999, ExecutionPolicy::Sequential),
        Err(SearchError::OutOfRange(_))
    ));
    assert!(matches!(
        match_document(&index, "fox", 999, ExecutionPolicy::Parallel),
        Err(SearchError::OutOfRange(_))
    ));
}

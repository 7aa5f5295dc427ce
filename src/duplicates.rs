//! Duplicate-document removal: two documents are duplicates if they index
//! to the exact same set of words (term frequencies ignored).

use crate::index::InvertedIndex;
use std::collections::BTreeSet;

/// Removes every later duplicate of an earlier document, in ascending id
/// order. Two documents are duplicates if their word sets (not term
/// frequencies) are identical.
///
/// `on_duplicate` is invoked with the id of each removed document, in the
/// order they are removed. Callers that want the original's
/// print-to-stdout behavior can pass `|id| println!("Found duplicate
/// document id {id}")`; callers that don't care can pass `|_| {}`.
pub fn remove_duplicates(index: &mut InvertedIndex, mut on_duplicate: impl FnMut(u32)) {
    let mut seen_word_sets: BTreeSet<BTreeSet<String>> = BTreeSet::new();
    let mut to_remove: Vec<u32> = Vec::new();

    for id in index.iter_ids() {
        let word_set: BTreeSet<String> = index.word_frequencies(id).into_keys().map(String::from).collect();
        if seen_word_sets.contains(&word_set) {
            to_remove.push(id);
        } else {
            seen_word_sets.insert(word_set);
        }
    }

    for id in to_remove {
        index.remove_document(id);
        on_duplicate(id);
    }
}

//! src/counts.rs
use std::collections::HashMap;

/// Word frequency map. Present keys always carry a count of at least one.
pub type WordCounts = HashMap<String, u64>;

/// Merges `from` into `into`, summing counts per word.
///
/// Missing destination keys are treated as zero. The operation is
/// associative and commutative, so per-worker partial results can be
/// combined in any order.
pub fn merge(into: &mut WordCounts, from: WordCounts) {
    for (word, count) in from {
        *into.entry(word).or_insert(0) += count;
    }
}

/// Folds every worker-local map into one freshly allocated result.
pub fn aggregate(locals: Vec<WordCounts>) -> WordCounts {
    let mut total = WordCounts::new();
    for local in locals {
        merge(&mut total, local);
    }
    total
}

//! src/counter.rs
use crate::counts::WordCounts;

/// Normalizes a token to lower-case letters and numbers only.
///
/// Classification is per Unicode codepoint, so non-Latin scripts survive
/// intact. A token with no letters or numbers normalizes to the empty
/// string, which is still a countable key.
pub fn normalize(token: &str) -> String {
    let mut normalized = String::with_capacity(token.len());
    for c in token.chars() {
        if c.is_alphabetic() {
            normalized.extend(c.to_lowercase());
        } else if c.is_numeric() {
            normalized.push(c);
        }
    }
    normalized
}

/// Counts the normalized words of a single input string.
///
/// Tokens are maximal runs of non-whitespace. An empty or whitespace-only
/// input yields an empty map.
pub fn count_words(input: &str) -> WordCounts {
    let mut counts = WordCounts::new();
    for token in input.split_whitespace() {
        *counts.entry(normalize(token)).or_insert(0) += 1;
    }
    counts
}

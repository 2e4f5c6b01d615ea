//! Token frequency ranking

use crate::types::TokenFrequency;
use std::collections::HashMap;

/// Count whitespace-separated tokens and rank them by count, descending.
///
/// Counting is case-sensitive. Tokens with equal counts keep the order in
/// which they first appeared, so adjacent capitalized words stay adjacent.
#[must_use]
pub fn rank_frequency(cleaned: &str) -> TokenFrequency {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in cleaned.split_whitespace() {
        if let Some(&i) = index.get(token) {
            counts[i].1 += 1;
        } else {
            index.insert(token, counts.len());
            counts.push((token.to_string(), 1));
        }
    }

    // Stable sort: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    TokenFrequency::from(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_first_seen_order() {
        let ranking = rank_frequency("b a c a b c d");
        let tokens: Vec<&str> = ranking.iter().map(|(t, _)| t).collect();
        assert_eq!(tokens, vec!["b", "a", "c", "d"]);
    }
}

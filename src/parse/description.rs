//! Keyword extraction from free-text recipe descriptions.
//!
//! # Examples
//!
//! ```
//! use sazonar::parse::description;
//!
//! let text = "Creamy garlic pasta, garlic lovers rejoice! Quick creamy garlic sauce.";
//! let keywords = description::keywords(Some(text), 2);
//! assert_eq!(keywords[0], "garlic");
//! ```

use std::collections::HashMap;

use crate::text::stopwords::StopWordsFilter;

/// Default number of keywords extracted from a description.
pub const DEFAULT_TOP_N: usize = 5;

/// Minimum token length kept after cleanup; shorter tokens carry little
/// signal in recipe descriptions.
const MIN_TOKEN_LEN: usize = 4;

/// Extract up to `top_n` keywords from a description, most frequent first.
///
/// Tokens are lowercased, stripped of punctuation, and filtered against
/// the culinary stop-word list and a length floor. Ties are broken by
/// first-seen order. A missing or empty description yields an empty list.
#[must_use]
pub fn keywords(text: Option<&str>, top_n: usize) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };

    let filter = StopWordsFilter::culinary();

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for token in text.to_lowercase().split_whitespace() {
        let token: String = token.chars().filter(|c| c.is_alphanumeric()).collect();
        if token.len() < MIN_TOKEN_LEN || filter.is_stop_word(&token) {
            continue;
        }
        if !counts.contains_key(&token) {
            first_seen.push(token.clone());
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    // Sort by descending frequency; first-seen order breaks ties.
    let rank: HashMap<&str, usize> = first_seen
        .iter()
        .enumerate()
        .map(|(i, token)| (token.as_str(), i))
        .collect();
    let mut ranked: Vec<String> = first_seen.clone();
    ranked.sort_by(|a, b| {
        counts[b]
            .cmp(&counts[a])
            .then_with(|| rank[a.as_str()].cmp(&rank[b.as_str()]))
    });

    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
#[path = "description_tests.rs"]
mod tests;

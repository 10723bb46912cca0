//! Stop words filtering for description keyword extraction.
//!
//! Stop words are common words that carry little semantic meaning and are
//! removed before counting keyword frequencies. Recipe descriptions have
//! their own filler vocabulary ("recipe", "delicious", "easy") on top of
//! ordinary English function words, so the default list here is tuned to
//! culinary free text rather than general prose.
//!
//! # Examples
//!
//! ```
//! use sazonar::text::stopwords::StopWordsFilter;
//!
//! let filter = StopWordsFilter::culinary();
//! assert!(filter.is_stop_word("recipe"));
//! assert!(!filter.is_stop_word("paprika"));
//! ```

use std::collections::HashSet;

/// Stop words filter with case-insensitive `HashSet` lookup.
///
/// # Examples
///
/// ```
/// use sazonar::text::stopwords::StopWordsFilter;
///
/// let filter = StopWordsFilter::new(["foo", "bar"]);
/// assert!(filter.is_stop_word("FOO"));
/// assert!(!filter.is_stop_word("baz"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Set of stop words (stored in lowercase for case-insensitive matching)
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter with custom stop words (converted to lowercase).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with the default culinary stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use sazonar::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::culinary();
    /// assert!(filter.is_stop_word("delicious"));
    /// ```
    #[must_use]
    pub fn culinary() -> Self {
        Self::new(CULINARY_STOP_WORDS)
    }

    /// Check if a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Retain only non-stop-word tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use sazonar::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::culinary();
    /// let tokens = vec!["this", "smoky", "delicious", "brisket"];
    /// assert_eq!(filter.filter(&tokens), vec!["smoky", "brisket"]);
    /// ```
    #[must_use]
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| token.as_ref().to_string())
            .filter(|token| !self.is_stop_word(token))
            .collect()
    }

    /// Get the number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the filter is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

/// Default culinary stop words.
///
/// Function words plus the filler vocabulary endemic to recipe
/// descriptions.
pub const CULINARY_STOP_WORDS: &[&str] = &build_stop_words();

/// Category-based stop word definitions. Each tuple: (category, words).
const STOP_WORD_CATEGORIES: &[(&str, &[&str])] = &[
    ("function_words", &[
        "this", "that", "these", "those", "with", "from", "have", "will",
        "your", "what", "when", "where", "which", "them", "they", "then",
        "than", "over", "also", "just", "very", "into", "onto", "while",
        "about", "there", "here", "some", "such", "been", "being", "were",
    ]),
    ("fillers", &[
        "really", "make", "made", "making", "great", "good", "best",
        "like", "love", "time", "even", "well", "more", "most", "ever",
    ]),
    ("recipe_jargon", &[
        "recipe", "recipes", "dish", "dishes", "delicious", "tasty",
        "yummy", "easy", "simple", "quick", "favorite", "perfect",
        "serve", "serving", "servings",
    ]),
];

/// Total number of stop words across all categories.
const TOTAL_STOP_WORDS: usize = count_total_stop_words();

/// Count total stop words at compile time.
const fn count_total_stop_words() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < STOP_WORD_CATEGORIES.len() {
        total += STOP_WORD_CATEGORIES[i].1.len();
        i += 1;
    }
    total
}

/// Flatten all category words into a single array at compile time.
const fn build_stop_words() -> [&'static str; TOTAL_STOP_WORDS] {
    let mut result = [""; TOTAL_STOP_WORDS];
    let mut idx = 0;
    let mut cat = 0;
    while cat < STOP_WORD_CATEGORIES.len() {
        let words = STOP_WORD_CATEGORIES[cat].1;
        let mut w = 0;
        while w < words.len() {
            result[idx] = words[w];
            idx += 1;
            w += 1;
        }
        cat += 1;
    }
    result
}

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;

//! TF-IDF vectorization for ingredient text.
//!
//! Transforms short ingredient documents ("chicken breast garlic onion")
//! into TF-IDF weighted vectors for cosine comparison. The vector space is
//! single-use: the scoring engine fits a fresh vectorizer per call over
//! `[user text] ∪ candidate texts`, so fitted state is never shared across
//! concurrent invocations.
//!
//! **TF-IDF Formula:**
//! ```text
//! tfidf(t, d) = tf(t, d) × idf(t)
//! tf(t, d) = count of term t in document d
//! idf(t) = ln(N / df(t))
//! where N = total documents, df(t) = documents containing term t
//! ```
//!
//! # Examples
//!
//! ```
//! use sazonar::text::vectorize::TfidfVectorizer;
//!
//! let docs = vec!["chicken garlic onion", "apple banana orange"];
//! let mut vectorizer = TfidfVectorizer::new();
//! let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
//! assert_eq!(matrix.len(), 2);
//! ```

use std::collections::{HashMap, HashSet};

use crate::error::{Result, SazonarError};
use crate::text::similarity::cosine_similarity;

/// Default vocabulary cap, matching the scoring engine's vector space.
pub const DEFAULT_MAX_FEATURES: usize = 1000;

/// TF-IDF vectorizer over lowercase whitespace unigrams.
///
/// The vocabulary is capped to the most document-frequent terms, which
/// keeps the vector space bounded for large candidate populations.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Term-to-column mapping learned by `fit`
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequencies, indexed by vocabulary column
    idf_values: Vec<f64>,
    /// Maximum vocabulary size
    max_features: usize,
}

impl TfidfVectorizer {
    /// Create a vectorizer with the default vocabulary cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf_values: Vec::new(),
            max_features: DEFAULT_MAX_FEATURES,
        }
    }

    /// Set the maximum vocabulary size.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Learn the vocabulary and inverse document frequencies.
    ///
    /// Terms are ranked by document frequency (ties broken
    /// lexicographically) and the vocabulary is truncated to
    /// `max_features`.
    ///
    /// # Errors
    ///
    /// Returns an error when `documents` is empty or no document yields a
    /// single token.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(SazonarError::Other(
                "cannot fit on empty documents".to_string(),
            ));
        }

        let n_docs = documents.len();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let unique_terms: HashSet<String> = tokenize(doc.as_ref()).collect();
            for term in unique_terms {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(SazonarError::Other(
                "no tokens found in any document".to_string(),
            ));
        }

        let mut ranked: Vec<(String, usize)> = doc_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        self.idf_values = ranked
            .iter()
            .map(|(_, df)| (n_docs as f64 / *df as f64).ln())
            .collect();
        self.vocabulary = ranked
            .into_iter()
            .enumerate()
            .map(|(idx, (term, _))| (term, idx))
            .collect();

        Ok(())
    }

    /// Transform documents into TF-IDF row vectors using the learned
    /// vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error when called before `fit`.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<Vec<f64>>> {
        if self.vocabulary.is_empty() {
            return Err(SazonarError::Other(
                "vocabulary is empty, call fit() first".to_string(),
            ));
        }

        let rows = documents
            .iter()
            .map(|doc| {
                let mut row = vec![0.0; self.vocabulary.len()];
                for term in tokenize(doc.as_ref()) {
                    if let Some(&idx) = self.vocabulary.get(&term) {
                        row[idx] += 1.0;
                    }
                }
                for (idx, value) in row.iter_mut().enumerate() {
                    *value *= self.idf_values[idx];
                }
                row
            })
            .collect();

        Ok(rows)
    }

    /// Fit on the documents and transform them in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting or transformation fails.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<Vec<f64>>> {
        self.fit(documents)?;
        self.transform(documents)
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

/// Compute cosine similarity between the first row of a TF-IDF matrix and
/// every following row, in one batched pass.
///
/// This is the shape the scoring engine needs: row 0 is the user's
/// ingredient text, rows 1.. are the candidates.
///
/// # Errors
///
/// Returns an error when the matrix has no rows.
pub fn cosine_against_first(matrix: &[Vec<f64>]) -> Result<Vec<f64>> {
    let Some((first, rest)) = matrix.split_first() else {
        return Err(SazonarError::Other(
            "cannot compare an empty matrix".to_string(),
        ));
    };

    rest.iter()
        .map(|row| cosine_similarity(first, row))
        .collect()
}

#[cfg(test)]
#[path = "vectorize_tests.rs"]
mod tests;

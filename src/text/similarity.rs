//! Similarity metrics for ingredient comparison.
//!
//! - Jaccard similarity: exact-term overlap between ingredient sets
//! - Cosine similarity: angular similarity between TF-IDF vectors
//!
//! # Quick Start
//!
//! ```
//! use sazonar::text::similarity::jaccard_similarity;
//!
//! let user = ["chicken", "onion"];
//! let recipe = ["chicken", "tomato", "onion"];
//!
//! let sim = jaccard_similarity(&user, &recipe);
//! assert!((sim - 2.0 / 3.0).abs() < 1e-9);
//! ```

use std::collections::HashSet;

use crate::error::{Result, SazonarError};

/// Compute Jaccard similarity between two ingredient collections.
///
/// Duplicates are collapsed before comparison. Returns a value in [0,1]:
/// the size of the intersection over the size of the union. An empty
/// collection on either side scores 0.0 — an empty ingredient list carries
/// no overlap signal and must never rank a recipe positively.
///
/// # Formula
/// ```text
/// jaccard(A, B) = |A ∩ B| / |A ∪ B|
/// ```
///
/// # Examples
///
/// ```
/// use sazonar::text::similarity::jaccard_similarity;
///
/// assert_eq!(jaccard_similarity(&["salt"], &["salt"]), 1.0);
/// assert_eq!(jaccard_similarity(&["salt"], &["pepper"]), 0.0);
/// assert_eq!(jaccard_similarity::<&str>(&[], &["pepper"]), 0.0);
/// ```
#[must_use]
pub fn jaccard_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let set_b: HashSet<&str> = b.iter().map(AsRef::as_ref).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 when either vector has zero norm (a zero vector is
/// orthogonal to everything).
///
/// # Errors
///
/// Returns an error if the vectors differ in length or are empty.
///
/// # Examples
///
/// ```
/// use sazonar::text::similarity::cosine_similarity;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [2.0, 4.0, 6.0];
/// let sim = cosine_similarity(&a, &b).expect("same length");
/// assert!((sim - 1.0).abs() < 1e-9);
/// ```
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(SazonarError::Other(format!(
            "vector length mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    if a.is_empty() {
        return Err(SazonarError::Other("vectors cannot be empty".to_string()));
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (norm_a * norm_b))
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;

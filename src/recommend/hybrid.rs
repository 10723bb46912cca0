//! Composite re-ranking of scored recommendations.
//!
//! A second scoring pass over an already-ranked result set: the weighted
//! score column is min-max normalized across the results, then boosted by
//! the raw similarity signals. Recipes whose exact ingredient overlap
//! clears a threshold get a flat bonus, so "you already have everything"
//! matches surface above merely well-rated ones.
//!
//! # Examples
//!
//! ```
//! use sazonar::recommend::hybrid::composite_rerank;
//! use sazonar::recommend::scorer::{Candidate, RecipeScorer, RecommendRequest, ScoringWeights, SignalSchema};
//!
//! let candidates = vec![
//!     Candidate::new(1, "garlic chicken").with_ingredients(["chicken", "garlic"]),
//!     Candidate::new(2, "fruit salad").with_ingredients(["apple", "banana"]),
//! ];
//! let scorer = RecipeScorer::new(ScoringWeights::jaccard_only(), SignalSchema::minimal());
//! let request = RecommendRequest::new(["chicken", "garlic"]);
//!
//! let results = scorer.recommend(&candidates, &[], &request).unwrap();
//! let reranked = composite_rerank(results, 0.3, 0.2);
//! assert!(reranked[0].composite_score.is_some());
//! assert_eq!(reranked[0].recipe_id, 1);
//! ```

use crate::recommend::scorer::{min_max_normalize, Recommendation};

/// Jaccard level above which a recipe counts as a strong exact match.
pub const HIGH_JACCARD_THRESHOLD: f64 = 0.3;

/// Flat bonus added for strong exact matches.
pub const HIGH_JACCARD_BONUS: f64 = 0.1;

/// Re-rank recommendations by a composite of the normalized base score
/// and the raw similarity signals.
///
/// `composite = norm(score) + jaccard_weight * jaccard
///            + cosine_weight * cosine + bonus`, where the bonus applies
/// when `jaccard > 0.3` and a missing cosine contributes 0. Each result's
/// `composite_score` is populated and the set is re-sorted descending by
/// it; ties keep their base-rank order. The base `score` column is left
/// untouched for display.
#[must_use]
pub fn composite_rerank(
    results: Vec<Recommendation>,
    jaccard_weight: f64,
    cosine_weight: f64,
) -> Vec<Recommendation> {
    if results.is_empty() {
        return results;
    }

    let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
    let normalized = min_max_normalize(&scores);

    let mut reranked: Vec<Recommendation> = results
        .into_iter()
        .zip(normalized)
        .map(|(mut result, norm)| {
            let mut composite = norm
                + jaccard_weight * result.jaccard
                + cosine_weight * result.cosine.unwrap_or(0.0);
            if result.jaccard > HIGH_JACCARD_THRESHOLD {
                composite += HIGH_JACCARD_BONUS;
            }
            result.composite_score = Some(composite);
            result
        })
        .collect();

    reranked.sort_by(|a, b| {
        b.composite_score
            .partial_cmp(&a.composite_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    reranked
}

#[cfg(test)]
#[path = "hybrid_tests.rs"]
mod tests;

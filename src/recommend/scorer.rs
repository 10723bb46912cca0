//! The similarity and scoring engine.
//!
//! [`RecipeScorer`] ranks a candidate population against a user ingredient
//! list and an interaction table. Each stage of [`RecipeScorer::recommend`]
//! is a value-semantics transformation — filter by time, compute
//! similarities, join interaction stats, score, sort — producing a new
//! result set rather than mutating a shared table, which keeps concurrent
//! scoring calls independent.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::features::pipeline::ProcessedRecipe;
use crate::text::similarity::jaccard_similarity;
use crate::text::vectorize::{cosine_against_first, TfidfVectorizer, DEFAULT_MAX_FEATURES};

/// Neutral mean-rating prior for recipes with no interactions.
pub const NEUTRAL_RATING: f64 = 0.5;

/// Popularity assigned to recipes with no interactions: no evidence.
pub const NO_POPULARITY: f64 = 0.0;

/// Non-negative blend weights for the final score.
///
/// `score = alpha*jaccard + delta*cosine + beta*mean_rating_norm
///        + gamma*popularity`. The weights conceptually sum to 1 but this
/// is not enforced; callers are responsible for sane choices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Weight for Jaccard ingredient similarity
    pub alpha: f64,
    /// Weight for normalized mean rating
    pub beta: f64,
    /// Weight for popularity (review count)
    pub gamma: f64,
    /// Weight for TF-IDF cosine similarity
    pub delta: f64,
}

impl ScoringWeights {
    /// Create weights from explicit values.
    #[must_use]
    pub fn new(alpha: f64, beta: f64, gamma: f64, delta: f64) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            delta,
        }
    }

    /// The two-term variant: ingredients by exact overlap only
    /// (delta = 0).
    #[must_use]
    pub fn jaccard_only() -> Self {
        Self::new(0.5, 0.3, 0.2, 0.0)
    }

    /// The hybrid variant blending Jaccard with TF-IDF cosine.
    #[must_use]
    pub fn hybrid() -> Self {
        Self::new(0.4, 0.3, 0.2, 0.1)
    }

    /// Sum of all four weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.alpha + self.beta + self.gamma + self.delta
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::jaccard_only()
    }
}

/// The caller's up-front declaration of which optional signals the
/// candidate population carries.
///
/// The engine's weighting logic is a pure function of this schema rather
/// than of repeated runtime introspection: a disabled signal contributes
/// its neutral default everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalSchema {
    /// Interaction ratings are available
    pub ratings: bool,
    /// TF-IDF cosine similarity should be computed
    pub cosine: bool,
    /// Candidates carry preparation-time minutes usable for filtering
    pub time: bool,
}

impl SignalSchema {
    /// All optional signals available.
    #[must_use]
    pub fn full() -> Self {
        Self {
            ratings: true,
            cosine: true,
            time: true,
        }
    }

    /// Ingredient overlap only: no ratings, no cosine, no time filter.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            ratings: false,
            cosine: false,
            time: false,
        }
    }
}

impl Default for SignalSchema {
    fn default() -> Self {
        Self::full()
    }
}

/// One candidate recipe as presented to the scorer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    /// Recipe identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Normalized ingredient names
    pub ingredients: Vec<String>,
    /// Preparation time in minutes, when known
    pub minutes: Option<u32>,
    /// Free-text description, when known
    pub description: Option<String>,
}

impl Candidate {
    /// Create a candidate with an id and display name.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the candidate's ingredient list.
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the candidate's preparation time.
    #[must_use]
    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.minutes = Some(minutes);
        self
    }

    /// Set the candidate's description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<&ProcessedRecipe> for Candidate {
    fn from(processed: &ProcessedRecipe) -> Self {
        Self {
            id: processed.features.recipe_id,
            name: processed.name.clone().unwrap_or_default(),
            ingredients: processed.features.ingredients.iter().cloned().collect(),
            minutes: processed.minutes,
            description: processed.description.clone(),
        }
    }
}

/// One user-recipe interaction record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Recipe the interaction refers to
    pub recipe_id: i64,
    /// Rating, typically 1-5
    pub rating: f64,
}

impl Interaction {
    /// Create an interaction record.
    #[must_use]
    pub fn new(recipe_id: i64, rating: f64) -> Self {
        Self { recipe_id, rating }
    }
}

/// Parameters of one recommendation call.
#[derive(Debug, Clone)]
pub struct RecommendRequest {
    /// User-supplied ingredient names
    pub user_ingredients: Vec<String>,
    /// Optional preparation-time ceiling in minutes
    pub time_limit: Option<u32>,
    /// Maximum number of results
    pub top_n: usize,
}

impl RecommendRequest {
    /// Create a request for the given user ingredients (top 10 results,
    /// no time ceiling).
    #[must_use]
    pub fn new<I, S>(user_ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_ingredients: user_ingredients.into_iter().map(Into::into).collect(),
            time_limit: None,
            top_n: 10,
        }
    }

    /// Set the preparation-time ceiling.
    #[must_use]
    pub fn with_time_limit(mut self, minutes: u32) -> Self {
        self.time_limit = Some(minutes);
        self
    }

    /// Set the maximum number of results.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

/// One ranked recommendation row, ready for direct display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recipe identifier
    pub recipe_id: i64,
    /// Display name
    pub name: String,
    /// Jaccard ingredient similarity in [0,1]
    pub jaccard: f64,
    /// TF-IDF cosine similarity, when the schema enables it
    pub cosine: Option<f64>,
    /// Min-max normalized mean rating (0.5 when no interactions)
    pub mean_rating_norm: f64,
    /// Min-max normalized review count (0.0 when no interactions)
    pub popularity: f64,
    /// Weighted blend of the above
    pub score: f64,
    /// Composite re-ranking score, when re-ranked
    pub composite_score: Option<f64>,
    /// Preparation time pass-through
    pub minutes: Option<u32>,
    /// Ingredient list pass-through
    pub ingredients: Vec<String>,
    /// Description pass-through
    pub description: Option<String>,
}

/// Strategy for computing text similarity between the user's ingredients
/// and every candidate in one batched pass.
///
/// Selected once at scorer construction: either the TF-IDF vector-space
/// variant or the Jaccard-only fallback. Implementations must preserve
/// output shape (one value per candidate) even when degrading internally.
pub trait SimilarityStrategy: fmt::Debug + Send + Sync {
    /// Compute one similarity value per candidate ingredient list.
    fn batch(&self, user_ingredients: &[String], candidates: &[&[String]]) -> Vec<f64>;

    /// Human-readable strategy name, for logs.
    fn name(&self) -> &'static str;
}

/// TF-IDF cosine similarity over a single-use vector space built from
/// `[user text] ∪ candidate texts`.
///
/// Falls back to per-candidate Jaccard when vectorization fails (e.g. no
/// tokens anywhere), preserving output shape.
#[derive(Debug, Clone)]
pub struct TfidfCosine {
    max_features: usize,
}

impl TfidfCosine {
    /// Create the strategy with the default 1000-term vocabulary cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

impl Default for TfidfCosine {
    fn default() -> Self {
        Self::new()
    }
}

fn ingredient_text(ingredients: &[String]) -> String {
    ingredients
        .iter()
        .map(|ing| ing.to_lowercase().trim().to_string())
        .filter(|ing| !ing.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl SimilarityStrategy for TfidfCosine {
    fn batch(&self, user_ingredients: &[String], candidates: &[&[String]]) -> Vec<f64> {
        let mut corpus = Vec::with_capacity(candidates.len() + 1);
        corpus.push(ingredient_text(user_ingredients));
        corpus.extend(candidates.iter().map(|c| ingredient_text(c)));

        // Fit per call: the vector space is single-use and never shared
        // across concurrent invocations.
        let mut vectorizer = TfidfVectorizer::new().with_max_features(self.max_features);
        let similarities = vectorizer
            .fit_transform(&corpus)
            .and_then(|matrix| cosine_against_first(&matrix));

        match similarities {
            Ok(similarities) => similarities,
            Err(e) => {
                warn!(error = %e, "TF-IDF vectorization failed, falling back to Jaccard");
                JaccardOnly.batch(user_ingredients, candidates)
            }
        }
    }

    fn name(&self) -> &'static str {
        "tfidf-cosine"
    }
}

/// Jaccard-only similarity, used when the vector-space capability is not
/// requested or unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaccardOnly;

impl SimilarityStrategy for JaccardOnly {
    fn batch(&self, user_ingredients: &[String], candidates: &[&[String]]) -> Vec<f64> {
        candidates
            .iter()
            .map(|candidate| jaccard_similarity(user_ingredients, candidate))
            .collect()
    }

    fn name(&self) -> &'static str {
        "jaccard"
    }
}

/// Min-max normalize values into [0,1] across a population.
///
/// A zero-range column (all values identical) normalizes to the neutral
/// constant 0.5, avoiding NaN from zero-range division.
#[must_use]
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let Some(min) = values.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max = values.iter().copied().fold(min, f64::max);

    if (max - min).abs() < f64::EPSILON {
        return vec![0.5; values.len()];
    }
    values.iter().map(|v| (v - min) / (max - min)).collect()
}

#[derive(Debug, Clone, Copy)]
struct RecipeStats {
    mean_rating_norm: f64,
    popularity: f64,
}

/// Group interactions by recipe, compute mean rating and review count,
/// and min-max normalize both across the population.
fn interaction_stats(interactions: &[Interaction]) -> HashMap<i64, RecipeStats> {
    if interactions.is_empty() {
        return HashMap::new();
    }

    let mut grouped: HashMap<i64, (f64, usize)> = HashMap::new();
    for interaction in interactions {
        let entry = grouped.entry(interaction.recipe_id).or_insert((0.0, 0));
        entry.0 += interaction.rating;
        entry.1 += 1;
    }

    let ids: Vec<i64> = grouped.keys().copied().collect();
    let mean_ratings: Vec<f64> = ids
        .iter()
        .map(|id| {
            let (sum, count) = grouped[id];
            sum / count as f64
        })
        .collect();
    let review_counts: Vec<f64> = ids.iter().map(|id| grouped[id].1 as f64).collect();

    let rating_norm = min_max_normalize(&mean_ratings);
    let popularity = min_max_normalize(&review_counts);

    ids.into_iter()
        .zip(rating_norm.into_iter().zip(popularity))
        .map(|(id, (mean_rating_norm, popularity))| {
            (
                id,
                RecipeStats {
                    mean_rating_norm,
                    popularity,
                },
            )
        })
        .collect()
}

/// The scoring engine.
///
/// Constructed once with weights and a signal schema; the similarity
/// strategy is selected at construction from the schema's cosine
/// capability. All scoring inputs are assumed already materialized in
/// memory; a single call's cost is bounded by the candidate population.
#[derive(Debug)]
pub struct RecipeScorer {
    weights: ScoringWeights,
    schema: SignalSchema,
    strategy: Box<dyn SimilarityStrategy>,
}

impl RecipeScorer {
    /// Create a scorer; the similarity strategy follows the schema.
    #[must_use]
    pub fn new(weights: ScoringWeights, schema: SignalSchema) -> Self {
        let strategy: Box<dyn SimilarityStrategy> = if schema.cosine {
            Box::new(TfidfCosine::new())
        } else {
            Box::new(JaccardOnly)
        };
        Self {
            weights,
            schema,
            strategy,
        }
    }

    /// Replace the similarity strategy (e.g. for tests).
    #[must_use]
    pub fn with_strategy(mut self, strategy: Box<dyn SimilarityStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// The configured weights.
    #[must_use]
    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// The active strategy's name.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Rank candidates against the user's ingredients.
    ///
    /// Stages: optional time filter, per-candidate Jaccard, batched
    /// strategy similarity, interaction stats with neutral-default left
    /// join, weighted score, stable descending sort, truncation to
    /// `top_n`. An empty result is a legitimate outcome, not an error.
    ///
    /// # Errors
    ///
    /// Reserved for structurally invalid inputs surfaced by a custom
    /// strategy; the built-in strategies degrade internally and never
    /// error. "No data" conditions (no interactions, empty ingredient
    /// lists) use the documented neutral defaults.
    pub fn recommend(
        &self,
        candidates: &[Candidate],
        interactions: &[Interaction],
        request: &RecommendRequest,
    ) -> Result<Vec<Recommendation>> {
        // Stage 1: time filter.
        let filtered: Vec<&Candidate> = match (self.schema.time, request.time_limit) {
            (true, Some(limit)) => candidates
                .iter()
                .filter(|c| c.minutes.map_or(true, |m| m <= limit))
                .collect(),
            _ => candidates.iter().collect(),
        };

        // Stage 2: exact overlap.
        let jaccard: Vec<f64> = filtered
            .iter()
            .map(|c| jaccard_similarity(&request.user_ingredients, &c.ingredients))
            .collect();

        // Stage 3: batched strategy similarity.
        let cosine: Option<Vec<f64>> = if self.schema.cosine {
            let ingredient_lists: Vec<&[String]> =
                filtered.iter().map(|c| c.ingredients.as_slice()).collect();
            Some(
                self.strategy
                    .batch(&request.user_ingredients, &ingredient_lists),
            )
        } else {
            None
        };

        // Stage 4: interaction stats with neutral-default left join.
        let stats = if self.schema.ratings {
            interaction_stats(interactions)
        } else {
            HashMap::new()
        };

        // Stage 5: weighted score per candidate.
        let mut results: Vec<Recommendation> = filtered
            .iter()
            .enumerate()
            .map(|(i, candidate)| {
                let recipe_stats =
                    stats
                        .get(&candidate.id)
                        .copied()
                        .unwrap_or(RecipeStats {
                            mean_rating_norm: NEUTRAL_RATING,
                            popularity: NO_POPULARITY,
                        });
                let cosine_i = cosine.as_ref().map(|values| values[i]);

                let score = self.weights.alpha * jaccard[i]
                    + self.weights.delta * cosine_i.unwrap_or(0.0)
                    + self.weights.beta * recipe_stats.mean_rating_norm
                    + self.weights.gamma * recipe_stats.popularity;

                Recommendation {
                    recipe_id: candidate.id,
                    name: candidate.name.clone(),
                    jaccard: jaccard[i],
                    cosine: cosine_i,
                    mean_rating_norm: recipe_stats.mean_rating_norm,
                    popularity: recipe_stats.popularity,
                    score,
                    composite_score: None,
                    minutes: candidate.minutes,
                    ingredients: candidate.ingredients.clone(),
                    description: candidate.description.clone(),
                }
            })
            .collect();

        // Stage 6: stable descending sort, then truncate. Stability keeps
        // ties in input order.
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(request.top_n);

        Ok(results)
    }
}

#[cfg(test)]
#[path = "scorer_tests.rs"]
mod tests;

//! Recipe scoring and recommendation.
//!
//! Ranks candidate recipes against a user ingredient list by blending
//! exact set overlap (Jaccard), TF-IDF cosine similarity, and normalized
//! rating/popularity signals into a single weighted score.
//!
//! - [`scorer`]: the scoring engine and its data contracts
//! - [`hybrid`]: composite re-ranking that rewards strong exact overlap
//!
//! # Quick Start
//!
//! ```
//! use sazonar::recommend::scorer::{
//!     Candidate, RecipeScorer, RecommendRequest, ScoringWeights, SignalSchema,
//! };
//!
//! let candidates = vec![
//!     Candidate::new(1, "garlic chicken").with_ingredients(["chicken", "garlic"]),
//!     Candidate::new(2, "fruit salad").with_ingredients(["apple", "banana"]),
//! ];
//!
//! let scorer = RecipeScorer::new(ScoringWeights::jaccard_only(), SignalSchema::minimal());
//! let request = RecommendRequest::new(["chicken", "garlic"]);
//! let results = scorer.recommend(&candidates, &[], &request).unwrap();
//! assert_eq!(results[0].recipe_id, 1);
//! ```

pub mod hybrid;
pub mod scorer;

pub use hybrid::composite_rerank;
pub use scorer::{
    Candidate, Interaction, RecipeScorer, Recommendation, RecommendRequest, ScoringWeights,
    SignalSchema,
};

//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sazonar::prelude::*;
//! ```

pub use crate::error::{Result, SazonarError};
pub use crate::features::pipeline::{FeaturePipeline, ProcessedRecipe};
pub use crate::features::{FeatureExtractor, RawRecipe, RecipeFeatures};
pub use crate::parse::ingredient::{IngredientLookup, IngredientParser};
pub use crate::recommend::hybrid::composite_rerank;
pub use crate::recommend::scorer::{
    Candidate, Interaction, RecipeScorer, Recommendation, RecommendRequest, ScoringWeights,
    SignalSchema,
};
pub use crate::text::similarity::{cosine_similarity, jaccard_similarity};

//! Batch feature extraction over a full dataset.
//!
//! The pipeline applies the [`FeatureExtractor`] across every row of an
//! input table, tolerating per-row failures: a failed row is skipped with
//! a logged warning naming its recipe id, and the batch continues. Input
//! is partitioned into contiguous chunks processed by independent rayon
//! workers — each worker reads its chunk and returns its own output, with
//! no shared mutable state beyond the read-only extractor.
//!
//! # Examples
//!
//! ```
//! use sazonar::features::pipeline::FeaturePipeline;
//! use sazonar::features::{FeatureExtractor, RawRecipe};
//!
//! let rows = vec![
//!     RawRecipe { id: 1, ingredients: "['salt']".to_string(), ..RawRecipe::default() },
//!     RawRecipe { id: 0, ..RawRecipe::default() }, // invalid, skipped
//! ];
//!
//! let pipeline = FeaturePipeline::new(FeatureExtractor::new());
//! let processed = pipeline.run(&rows);
//! assert_eq!(processed.len(), 1);
//! assert_eq!(processed[0].features.recipe_id, 1);
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::features::{FeatureExtractor, RawRecipe, RecipeFeatures};

/// Default rows per chunk, sized so chunk dispatch overhead stays small
/// relative to per-row parsing work.
pub const DEFAULT_CHUNK_SIZE: usize = 2000;

/// One processed recipe: extracted features merged with the original
/// metadata columns the serving layer displays. This is the persisted
/// hand-off artifact of the batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedRecipe {
    /// Extracted features
    pub features: RecipeFeatures,
    /// Display name from the source row
    pub name: Option<String>,
    /// Preparation time in minutes from the source row
    pub minutes: Option<u32>,
    /// Free-text description from the source row
    pub description: Option<String>,
    /// Number of normalized ingredients
    pub n_ingredients: usize,
}

/// Applies a [`FeatureExtractor`] across an input table in parallel
/// chunks.
#[derive(Debug, Clone)]
pub struct FeaturePipeline {
    extractor: FeatureExtractor,
    chunk_size: usize,
}

impl FeaturePipeline {
    /// Create a pipeline with the default chunk size.
    #[must_use]
    pub fn new(extractor: FeatureExtractor) -> Self {
        Self {
            extractor,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Set the number of rows per chunk (minimum 1).
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Process one contiguous chunk of rows.
    ///
    /// This is the chunk-worker contract: the output holds one entry per
    /// successfully extracted row (possibly fewer than the input), in
    /// input order. Failed rows are skipped and logged, never propagated.
    #[must_use]
    pub fn process_chunk(&self, rows: &[RawRecipe]) -> Vec<ProcessedRecipe> {
        rows.iter()
            .filter_map(|row| match self.extractor.extract(row) {
                Ok(features) => Some(merge_metadata(features, row)),
                Err(e) => {
                    warn!(recipe_id = row.id, error = %e, "skipping recipe row");
                    None
                }
            })
            .collect()
    }

    /// Process the full input table in parallel chunks.
    ///
    /// Rows are partitioned into contiguous chunks, each processed by an
    /// independent worker; per-chunk outputs are concatenated in input
    /// order.
    #[must_use]
    pub fn run(&self, rows: &[RawRecipe]) -> Vec<ProcessedRecipe> {
        rows.par_chunks(self.chunk_size)
            .flat_map_iter(|chunk| self.process_chunk(chunk))
            .collect()
    }
}

fn merge_metadata(features: RecipeFeatures, row: &RawRecipe) -> ProcessedRecipe {
    let n_ingredients = features.ingredients.len();
    ProcessedRecipe {
        features,
        name: row.name.clone(),
        minutes: row.minutes,
        description: row.description.clone(),
        n_ingredients,
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;

//! Per-recipe feature extraction.
//!
//! [`FeatureExtractor`] combines the field parsers into one normalized
//! [`RecipeFeatures`] record per raw recipe. A single parser failure never
//! aborts the record: the affected field degrades to its empty/neutral
//! default and extraction continues. Only a missing recipe identifier is
//! fatal for a record.
//!
//! # Examples
//!
//! ```
//! use sazonar::features::{FeatureExtractor, RawRecipe};
//!
//! let raw = RawRecipe {
//!     id: 42,
//!     name: Some("weeknight chicken".to_string()),
//!     minutes: Some(30),
//!     ingredients: "['2 cups fresh chicken breast', 'salt']".to_string(),
//!     nutrition: "[400, 10, 5, 50, 20, 25, 800]".to_string(),
//!     tags: "['dinner', 'main-dish', 'italian']".to_string(),
//!     steps: "['season the chicken', 'bake at 400f']".to_string(),
//!     n_steps: 2,
//!     description: Some("a simple garlic chicken dinner".to_string()),
//! };
//!
//! let extractor = FeatureExtractor::new();
//! let features = extractor.extract(&raw).expect("valid id");
//! assert_eq!(features.recipe_id, 42);
//! assert!(features.ingredients.contains("chicken breast"));
//! assert_eq!(features.meal_type.as_deref(), Some("dinner"));
//! ```

pub mod pipeline;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SazonarError};
use crate::parse::description;
use crate::parse::ingredient::IngredientParser;
use crate::parse::nutrition;
use crate::parse::steps;
use crate::parse::tags;

/// One raw recipe record as it arrives from the source dataset: the
/// semi-structured list fields are still strings, plus the metadata
/// columns merged back for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecipe {
    /// Source dataset identifier
    pub id: i64,
    /// Display name
    pub name: Option<String>,
    /// Preparation time in minutes
    pub minutes: Option<u32>,
    /// String-encoded list of raw ingredient phrases
    pub ingredients: String,
    /// String-encoded numeric list of length 7
    pub nutrition: String,
    /// String-encoded list of tags
    pub tags: String,
    /// String-encoded list of step strings
    pub steps: String,
    /// Declared number of preparation steps
    pub n_steps: usize,
    /// Free-text description
    pub description: Option<String>,
}

/// Normalized per-recipe features, immutable once built.
///
/// Every field except `recipe_id` defaults to an empty/neutral value
/// rather than being absent, so downstream code never needs null checks
/// beyond "is empty".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeFeatures {
    /// Unique identifier matching the source dataset
    pub recipe_id: i64,
    /// Deduplicated normalized ingredient names
    pub ingredients: BTreeSet<String>,
    /// Category name to ingredients in that category
    pub ingredient_categories: BTreeMap<String, Vec<String>>,
    /// Nutrient name to value; empty if parsing failed
    pub nutrition: BTreeMap<String, f64>,
    /// Normalized tags
    pub tags: BTreeSet<String>,
    /// Meal type derived from tags (breakfast/lunch/dinner/snack)
    pub meal_type: Option<String>,
    /// Matching dietary restriction categories
    pub dietary_restrictions: Vec<String>,
    /// Cuisine derived from tags
    pub cuisine_type: Option<String>,
    /// Number of preparation steps
    pub n_steps: usize,
    /// Heuristic [0,1] difficulty estimate
    pub effort_score: f64,
    /// Technique keywords detected in step text
    pub cooking_techniques: BTreeSet<String>,
    /// Most frequent description keywords, descending
    pub description_keywords: Vec<String>,
}

/// Extracts one [`RecipeFeatures`] record from one [`RawRecipe`].
///
/// The ingredient parser (and its optional lookup table) is the only
/// stateful collaborator; it is read-only after construction and safe to
/// share across parallel batch workers.
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    ingredient_parser: IngredientParser,
    top_keywords: usize,
}

impl FeatureExtractor {
    /// Create an extractor with manual ingredient cleanup only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ingredient_parser: IngredientParser::new(),
            top_keywords: description::DEFAULT_TOP_N,
        }
    }

    /// Create an extractor around a configured ingredient parser.
    #[must_use]
    pub fn with_ingredient_parser(ingredient_parser: IngredientParser) -> Self {
        Self {
            ingredient_parser,
            top_keywords: description::DEFAULT_TOP_N,
        }
    }

    /// Set the number of description keywords to extract.
    #[must_use]
    pub fn with_top_keywords(mut self, top_keywords: usize) -> Self {
        self.top_keywords = top_keywords;
        self
    }

    /// Extract features from one raw recipe.
    ///
    /// # Errors
    ///
    /// Returns [`SazonarError::InvalidRecord`] when the record carries no
    /// usable identifier (`id <= 0`). Field-level parse failures degrade
    /// to defaults and do not error.
    pub fn extract(&self, raw: &RawRecipe) -> Result<RecipeFeatures> {
        if raw.id <= 0 {
            return Err(SazonarError::InvalidRecord { recipe_id: raw.id });
        }

        let ingredients = self.ingredient_parser.parse_and_clean(&raw.ingredients);
        let ingredient_categories = self.ingredient_parser.categorize(&ingredients);

        let nutrition = nutrition::parse(&raw.nutrition);

        let tag_set = tags::parse(&raw.tags);
        let meal_type = tags::meal_type(&tag_set).map(ToString::to_string);
        let dietary_restrictions = tags::dietary_restrictions(&tag_set)
            .into_iter()
            .map(ToString::to_string)
            .collect();
        let cuisine_type = tags::cuisine_type(&tag_set).map(ToString::to_string);

        let step_list = steps::parse(&raw.steps);
        let cooking_techniques = steps::techniques(&step_list);
        let effort_score = steps::effort_score(&step_list, raw.n_steps);

        let description_keywords =
            description::keywords(raw.description.as_deref(), self.top_keywords);

        Ok(RecipeFeatures {
            recipe_id: raw.id,
            ingredients,
            ingredient_categories,
            nutrition,
            tags: tag_set,
            meal_type,
            dietary_restrictions,
            cuisine_type,
            n_steps: raw.n_steps,
            effort_score,
            cooking_techniques,
            description_keywords,
        })
    }
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;

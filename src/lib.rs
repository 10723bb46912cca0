//! Sazonar: recipe feature extraction and recommendation in pure Rust.
//!
//! Sazonar preprocesses a raw recipe/interaction dataset into structured
//! per-recipe features, then scores and ranks recipes against a
//! user-supplied ingredient list by blending exact set overlap (Jaccard),
//! vector-space text similarity (TF-IDF cosine), and rating/popularity
//! normalization into a single ranking.
//!
//! # Quick Start
//!
//! ```
//! use sazonar::prelude::*;
//!
//! let candidates = vec![
//!     Candidate::new(1, "garlic chicken")
//!         .with_ingredients(["chicken", "garlic", "onion"]),
//!     Candidate::new(2, "fruit salad")
//!         .with_ingredients(["apple", "banana", "orange"]),
//! ];
//!
//! let scorer = RecipeScorer::new(ScoringWeights::jaccard_only(), SignalSchema::minimal());
//! let request = RecommendRequest::new(["chicken", "onion"]).with_top_n(5);
//! let results = scorer.recommend(&candidates, &[], &request).unwrap();
//!
//! assert_eq!(results[0].recipe_id, 1);
//! assert!(results[0].jaccard > results[1].jaccard);
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Field parsers for semi-structured recipe text fields
//! - [`text`]: Stop words, similarity metrics, and TF-IDF vectorization
//! - [`features`]: Per-recipe feature extraction and the batch pipeline
//! - [`recommend`]: Similarity blending, scoring, and ranking
//! - [`error`]: Error types

pub mod error;
pub mod features;
pub mod parse;
pub mod prelude;
pub mod recommend;
pub mod text;

pub use error::{Result, SazonarError};

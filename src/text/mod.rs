//! Text processing for ingredient and description analysis.
//!
//! - [`stopwords`]: stop-word filtering for description keyword extraction
//! - [`similarity`]: Jaccard and cosine similarity
//! - [`vectorize`]: TF-IDF vectorization for ingredient text

pub mod similarity;
pub mod stopwords;
pub mod vectorize;

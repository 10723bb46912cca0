//! Field parsers for semi-structured recipe text fields.
//!
//! The source dataset encodes several per-recipe fields as Python-style
//! list literals inside CSV cells (e.g. `"['2 cups flour', 'salt']"`).
//! Each parser here turns one such raw field into a typed value and never
//! raises on malformed input: a malformed field yields an empty/default
//! result and a logged warning.
//!
//! - [`literal`]: restricted list-literal decoder (strings/numbers only)
//! - [`ingredient`]: ingredient normalization and categorization
//! - [`nutrition`]: 7-field nutrition vector and health score
//! - [`tags`]: tag cleanup, meal type, dietary restrictions, cuisine
//! - [`steps`]: step cleanup, cooking techniques, effort score
//! - [`description`]: keyword extraction from free-text descriptions

pub mod description;
pub mod ingredient;
pub mod literal;
pub mod nutrition;
pub mod steps;
pub mod tags;

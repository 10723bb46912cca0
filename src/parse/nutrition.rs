//! Nutrition field parsing and health scoring.
//!
//! The dataset encodes nutrition as a fixed-length numeric list in the
//! order `[calories, fat, total_fat, carbohydrates, sugar, protein,
//! sodium]`. Parsing fails soft: a wrong-length or non-numeric list yields
//! an empty mapping and a logged warning.
//!
//! # Examples
//!
//! ```
//! use sazonar::parse::nutrition;
//!
//! let parsed = nutrition::parse("[400, 10, 5, 50, 20, 25, 800]");
//! assert_eq!(parsed.len(), 7);
//! assert_eq!(parsed["calories"], 400.0);
//!
//! let score = nutrition::health_score(&parsed);
//! assert!((0.0..=1.0).contains(&score));
//! ```

use std::collections::BTreeMap;

use tracing::warn;

use crate::parse::literal::decode_number_list;

/// Canonical nutrient names in dataset order.
pub const NUTRITION_FIELDS: &[&str] = &[
    "calories",
    "fat",
    "total_fat",
    "carbohydrates",
    "sugar",
    "protein",
    "sodium",
];

/// Neutral health score used when no nutrition data is available.
pub const NEUTRAL_HEALTH_SCORE: f64 = 0.5;

/// Parse a nutrition field into a nutrient-to-value mapping.
///
/// Returns an empty mapping (and logs a warning) when the field is not a
/// numeric list of exactly [`NUTRITION_FIELDS`]`.len()` values.
#[must_use]
pub fn parse(nutrition_field: &str) -> BTreeMap<String, f64> {
    let values = match decode_number_list(nutrition_field) {
        Ok(values) => values,
        Err(e) => {
            warn!(error = %e, "failed to parse nutrition field");
            return BTreeMap::new();
        }
    };

    if values.len() != NUTRITION_FIELDS.len() {
        warn!(
            expected = NUTRITION_FIELDS.len(),
            actual = values.len(),
            "unexpected nutrition field count"
        );
        return BTreeMap::new();
    }

    NUTRITION_FIELDS
        .iter()
        .zip(values)
        .map(|(name, value)| ((*name).to_string(), value))
        .collect()
}

/// Compute a simple [0,1] health score from a nutrient mapping.
///
/// Penalizes excess calories, sugar, and sodium; rewards protein up to a
/// cap. An empty mapping scores the neutral 0.5. The result is rounded to
/// two decimals.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use sazonar::parse::nutrition::health_score;
///
/// assert_eq!(health_score(&BTreeMap::new()), 0.5);
/// ```
#[must_use]
pub fn health_score(nutrition: &BTreeMap<String, f64>) -> f64 {
    if nutrition.is_empty() {
        return NEUTRAL_HEALTH_SCORE;
    }

    let get = |name: &str| nutrition.get(name).copied().unwrap_or(0.0);

    let penalties = ((get("calories") - 600.0) / 2000.0).max(0.0)
        + ((get("sugar") - 50.0) / 200.0).max(0.0)
        + ((get("sodium") - 1000.0) / 4000.0).max(0.0);
    let protein_bonus = (get("protein") / 50.0).min(0.3);

    let score = (1.0 - penalties + protein_bonus).clamp(0.0, 1.0);
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "nutrition_tests.rs"]
mod tests;

//! Tag parsing and structured information extraction.
//!
//! Recipe tags encode meal type, dietary restrictions, cuisine, and time
//! constraints as free-form strings. The extractors here map fixed keyword
//! vocabularies onto a parsed tag set.
//!
//! # Examples
//!
//! ```
//! use sazonar::parse::tags;
//!
//! let parsed = tags::parse("['dinner', 'main-dish', 'italian']");
//! assert_eq!(tags::meal_type(&parsed), Some("dinner"));
//! assert_eq!(tags::cuisine_type(&parsed), Some("italian"));
//! ```

use std::collections::BTreeSet;

use tracing::warn;

use crate::parse::literal::decode_string_list;

/// Meal types with their tag keywords, in priority order. The first
/// keyword of each group is the distinguishing one; later keywords (like
/// "main-dish") are shared across groups and only decide when no
/// distinguishing keyword matched.
pub const MEAL_TYPES: &[(&str, &[&str])] = &[
    ("breakfast", &["breakfast", "brunch"]),
    ("lunch", &["lunch", "main-dish"]),
    ("dinner", &["dinner", "main-dish"]),
    ("snack", &["snacks", "appetizers"]),
];

/// Dietary restriction categories with their tag synonyms. A recipe may
/// match any number of categories.
pub const DIETARY: &[(&str, &[&str])] = &[
    ("vegetarian", &["vegetarian", "vegan"]),
    ("vegan", &["vegan"]),
    ("low-carb", &["low-carb", "low-carbohydrate"]),
    ("gluten-free", &["gluten-free"]),
    ("dairy-free", &["dairy-free", "lactose-free"]),
    ("healthy", &["healthy", "low-fat", "low-sodium", "low-calorie"]),
];

/// Cuisine names recognized verbatim as tags, in priority order.
pub const CUISINES: &[&str] = &[
    "mexican",
    "italian",
    "chinese",
    "indian",
    "french",
    "thai",
    "japanese",
    "greek",
    "spanish",
    "american",
    "mediterranean",
];

/// Time-constraint tags mapped to their minute ceilings.
pub const TIME_PATTERNS: &[(&str, u32)] = &[
    ("15-minutes-or-less", 15),
    ("30-minutes-or-less", 30),
    ("60-minutes-or-less", 60),
    ("4-hours-or-less", 240),
];

/// Parse a tags field into a lowercased, trimmed tag set.
///
/// Malformed input yields an empty set and a logged warning.
#[must_use]
pub fn parse(tags_field: &str) -> BTreeSet<String> {
    match decode_string_list(tags_field) {
        Ok(tags) => tags
            .iter()
            .map(|tag| tag.to_lowercase().trim().to_string())
            .collect(),
        Err(e) => {
            warn!(error = %e, "failed to parse tags field");
            BTreeSet::new()
        }
    }
}

/// Extract the meal type from the tag set.
///
/// A group's distinguishing keyword wins first in priority order, so
/// `{dinner, main-dish}` resolves to dinner even though "main-dish" also
/// appears in the lunch group. Shared keywords decide only when no
/// distinguishing keyword matched.
#[must_use]
pub fn meal_type(tags: &BTreeSet<String>) -> Option<&'static str> {
    MEAL_TYPES
        .iter()
        .find(|(_, keywords)| keywords.first().is_some_and(|kw| tags.contains(*kw)))
        .or_else(|| {
            MEAL_TYPES
                .iter()
                .find(|(_, keywords)| keywords.iter().any(|kw| tags.contains(*kw)))
        })
        .map(|(meal, _)| *meal)
}

/// Extract all matching dietary restrictions, in declaration order.
#[must_use]
pub fn dietary_restrictions(tags: &BTreeSet<String>) -> Vec<&'static str> {
    DIETARY
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| tags.contains(*kw)))
        .map(|(restriction, _)| *restriction)
        .collect()
}

/// Extract the cuisine type: the first [`CUISINES`] entry present verbatim
/// as a tag.
#[must_use]
pub fn cuisine_type(tags: &BTreeSet<String>) -> Option<&'static str> {
    CUISINES.iter().find(|cuisine| tags.contains(**cuisine)).copied()
}

/// Extract the minute ceiling implied by a time-constraint tag, if any.
#[must_use]
pub fn time_constraint(tags: &BTreeSet<String>) -> Option<u32> {
    TIME_PATTERNS
        .iter()
        .find(|(pattern, _)| tags.contains(*pattern))
        .map(|(_, minutes)| *minutes)
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;

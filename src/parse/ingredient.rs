//! Ingredient normalization and categorization.
//!
//! Raw ingredient phrases arrive as list literals of free text
//! (`"['2 cups fresh chicken breast', 'salt']"`). Normalization prefers an
//! external raw-to-canonical lookup table when one is available and falls
//! back to manual cleanup (strip quantities, units of measure, preparation
//! adjectives, punctuation). Cleaned ingredients are deduplicated and
//! assigned to fixed pantry categories.
//!
//! # Examples
//!
//! ```
//! use sazonar::parse::ingredient::IngredientParser;
//!
//! let parser = IngredientParser::new();
//! let ingredients = parser.parse_and_clean("['2 cups fresh chicken breast', 'salt']");
//! assert!(ingredients.contains("chicken breast"));
//! assert!(ingredients.contains("salt"));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::error::{Result, SazonarError};
use crate::parse::literal::decode_string_list;

/// Pantry categories with their canonical base terms, in priority order.
/// An ingredient is assigned to the first category whose base term appears
/// as a substring of the cleaned ingredient.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    ("proteins", &[
        "chicken", "beef", "pork", "fish", "salmon", "tuna", "shrimp",
        "turkey", "lamb", "egg", "tofu", "tempeh",
    ]),
    ("dairy", &["milk", "cheese", "butter", "cream", "yogurt", "sour cream"]),
    ("vegetables", &[
        "tomato", "onion", "garlic", "carrot", "potato", "broccoli",
        "spinach", "pepper", "mushroom", "lettuce", "cucumber",
    ]),
    ("fruits", &["apple", "banana", "orange", "lemon", "strawberry", "blueberry"]),
    ("grains", &["flour", "rice", "pasta", "bread", "oat", "quinoa", "wheat"]),
    ("spices", &[
        "salt", "pepper", "cumin", "paprika", "cinnamon", "basil",
        "oregano", "thyme", "rosemary",
    ]),
    ("oils", &["olive oil", "vegetable oil", "coconut oil", "butter"]),
    ("sweeteners", &["sugar", "honey", "maple syrup", "brown sugar"]),
];

/// Category bucket for ingredients matching no base term.
pub const OTHER_CATEGORY: &str = "other";

// Quantities: plain numbers, decimals, and fractions like "1 / 2".
static QUANTITIES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.?\d*\s*/?\s*\d*").expect("valid quantity regex"));

// Units of measure (singular and plural), whole-word, case-insensitive.
static MEASURES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(cups?|tablespoons?|teaspoons?|pounds?|ounces?|oz|lbs?|tsp|tbsp|ml|l|g|kg|pinch|pinches|dash|dashes)\b",
    )
    .expect("valid measures regex")
});

// Punctuation, keeping word characters, whitespace, and hyphens.
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid punctuation regex"));

// Preparation adjectives that describe state rather than identity.
static PREP_ADJECTIVES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(fresh|dried|frozen|chopped|diced|sliced|minced|ground)\b")
        .expect("valid adjective regex")
});

/// Raw-to-canonical ingredient lookup loaded from an external mapping file.
///
/// The mapping file is tabular with a `raw_ingr` column (raw phrase) and a
/// `replaced` column (canonical form); a `normalized` column is accepted as
/// an alternative to `replaced`. Keys and values are lowercased and trimmed.
#[derive(Debug, Clone, Default)]
pub struct IngredientLookup {
    raw_to_normalized: HashMap<String, String>,
}

impl IngredientLookup {
    /// Build a lookup from in-memory (raw, canonical) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw_to_normalized = pairs
            .into_iter()
            .map(|(raw, canonical)| {
                (
                    raw.as_ref().to_lowercase().trim().to_string(),
                    canonical.as_ref().to_lowercase().trim().to_string(),
                )
            })
            .collect();
        Self { raw_to_normalized }
    }

    /// Load a lookup from a CSV file with `raw_ingr` and `replaced` (or
    /// `normalized`) columns.
    ///
    /// # Errors
    ///
    /// Returns [`SazonarError::MissingResource`] if the file cannot be read
    /// or lacks the required columns.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let resource_error = |message: String| SazonarError::MissingResource {
            path: path.display().to_string(),
            message,
        };

        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| resource_error(format!("failed to open mapping file: {e}")))?;

        let headers = reader
            .headers()
            .map_err(|e| resource_error(format!("failed to read headers: {e}")))?
            .clone();

        let raw_idx = headers
            .iter()
            .position(|h| h == "raw_ingr")
            .ok_or_else(|| resource_error("missing 'raw_ingr' column".to_string()))?;
        let canonical_idx = headers
            .iter()
            .position(|h| h == "replaced")
            .or_else(|| headers.iter().position(|h| h == "normalized"))
            .ok_or_else(|| resource_error("missing 'replaced'/'normalized' column".to_string()))?;

        let mut raw_to_normalized = HashMap::new();
        for record in reader.records() {
            let record = record
                .map_err(|e| resource_error(format!("failed to read mapping row: {e}")))?;
            let (Some(raw), Some(canonical)) = (record.get(raw_idx), record.get(canonical_idx))
            else {
                continue;
            };
            raw_to_normalized.insert(
                raw.to_lowercase().trim().to_string(),
                canonical.to_lowercase().trim().to_string(),
            );
        }

        info!(
            entries = raw_to_normalized.len(),
            path = %path.display(),
            "ingredient lookup loaded"
        );
        Ok(Self { raw_to_normalized })
    }

    /// Look up the canonical form of a lowercased, trimmed raw phrase.
    #[must_use]
    pub fn get(&self, raw: &str) -> Option<&str> {
        self.raw_to_normalized.get(raw).map(String::as_str)
    }

    /// Number of mapping entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw_to_normalized.len()
    }

    /// Whether the lookup holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw_to_normalized.is_empty()
    }
}

/// Parser that turns a raw ingredients field into a deduplicated set of
/// normalized ingredient names, with pantry categorization.
///
/// # Examples
///
/// ```
/// use sazonar::parse::ingredient::IngredientParser;
///
/// let parser = IngredientParser::new();
/// assert_eq!(parser.manual_clean("2 cups Fresh Basil"), "basil");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IngredientParser {
    lookup: Option<IngredientLookup>,
}

impl IngredientParser {
    /// Create a parser using manual cleanup only.
    #[must_use]
    pub fn new() -> Self {
        Self { lookup: None }
    }

    /// Create a parser backed by a raw-to-canonical lookup table.
    #[must_use]
    pub fn with_lookup(lookup: IngredientLookup) -> Self {
        Self {
            lookup: Some(lookup),
        }
    }

    /// Create a parser from an optional mapping-file path.
    ///
    /// Absence or unreadability of the mapping file is not an error: the
    /// parser degrades to manual cleanup only, and the failure is logged
    /// once here at construction time.
    #[must_use]
    pub fn from_optional_path<P: AsRef<Path>>(path: Option<P>) -> Self {
        match path {
            Some(path) => match IngredientLookup::from_csv_path(&path) {
                Ok(lookup) => Self::with_lookup(lookup),
                Err(e) => {
                    warn!(error = %e, "proceeding without ingredient normalization table");
                    Self::new()
                }
            },
            None => Self::new(),
        }
    }

    /// Normalize one raw ingredient phrase.
    ///
    /// Tries an exact lookup on the lowercased phrase first, then a lookup
    /// on the manually-cleaned form, then falls back to the cleaned form
    /// itself.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        if let Some(lookup) = &self.lookup {
            let raw_lower = raw.to_lowercase().trim().to_string();
            if let Some(canonical) = lookup.get(&raw_lower) {
                return canonical.to_string();
            }
            let pre_cleaned = self.manual_clean(raw);
            if let Some(canonical) = lookup.get(&pre_cleaned) {
                return canonical.to_string();
            }
        }
        self.manual_clean(raw)
    }

    /// Manual cleanup: lowercase, strip quantities, units, punctuation and
    /// preparation adjectives, collapse whitespace.
    ///
    /// Cleaning is idempotent: cleaning an already-clean string returns it
    /// unchanged.
    #[must_use]
    pub fn manual_clean(&self, ingredient: &str) -> String {
        let ing = ingredient.to_lowercase();
        let ing = QUANTITIES.replace_all(&ing, "");
        let ing = MEASURES.replace_all(&ing, "");
        let ing = PUNCTUATION.replace_all(&ing, "");
        let ing = PREP_ADJECTIVES.replace_all(&ing, "");
        ing.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Decode an ingredients field and normalize every phrase.
    ///
    /// Results shorter than 3 characters are dropped; duplicates collapse
    /// into the set (several raw variants can normalize identically).
    /// Malformed input yields an empty set and a logged warning.
    #[must_use]
    pub fn parse_and_clean(&self, ingredients_field: &str) -> BTreeSet<String> {
        let raw_list = match decode_string_list(ingredients_field) {
            Ok(list) => list,
            Err(e) => {
                warn!(error = %e, "failed to parse ingredients field");
                return BTreeSet::new();
            }
        };

        raw_list
            .iter()
            .map(|raw| self.normalize(raw))
            .filter(|normalized| normalized.len() > 2)
            .collect()
    }

    /// Assign each ingredient to the first matching pantry category.
    ///
    /// A base term matches when it appears as a substring of the cleaned
    /// ingredient; ingredients matching no base term land in `"other"`.
    /// Within a category, input order is preserved.
    #[must_use]
    pub fn categorize<'a, I>(&self, ingredients: I) -> BTreeMap<String, Vec<String>>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut categorized: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for ingredient in ingredients {
            let category = CATEGORIES
                .iter()
                .find(|(_, base_terms)| base_terms.iter().any(|base| ingredient.contains(base)))
                .map_or(OTHER_CATEGORY, |(name, _)| name);
            categorized
                .entry(category.to_string())
                .or_default()
                .push(ingredient.clone());
        }
        categorized
    }
}

#[cfg(test)]
#[path = "ingredient_tests.rs"]
mod tests;

//! Step parsing, cooking-technique detection, and effort scoring.
//!
//! # Examples
//!
//! ```
//! use sazonar::parse::steps;
//!
//! let parsed = steps::parse("['bake at 350f', 'simmer the sauce slowly']");
//! let techniques = steps::techniques(&parsed);
//! assert!(techniques.contains("bake"));
//! assert!(techniques.contains("simmer"));
//!
//! let effort = steps::effort_score(&parsed, 2);
//! assert!((0.0..=1.0).contains(&effort));
//! ```

use std::collections::BTreeSet;

use tracing::warn;

use crate::parse::literal::decode_string_list;

/// Cooking technique vocabulary matched as substrings across step text.
pub const TECHNIQUES: &[&str] = &[
    "bake", "boil", "fry", "grill", "roast", "steam", "saute", "simmer",
    "mix", "blend", "whisk", "chop", "dice", "marinate", "season",
    "garnish", "broil", "poach", "braise", "stir-fry",
];

/// Words indicating extra care or coordination in a step.
pub const COMPLEXITY_WORDS: &[&str] = &[
    "carefully",
    "slowly",
    "constantly",
    "meanwhile",
    "simultaneously",
    "gradually",
];

/// Parse a steps field into lowercased, trimmed step strings.
///
/// Malformed input yields an empty list and a logged warning.
#[must_use]
pub fn parse(steps_field: &str) -> Vec<String> {
    match decode_string_list(steps_field) {
        Ok(steps) => steps
            .iter()
            .map(|step| step.to_lowercase().trim().to_string())
            .collect(),
        Err(e) => {
            warn!(error = %e, "failed to parse steps field");
            Vec::new()
        }
    }
}

/// Detect cooking techniques appearing anywhere in the step text.
#[must_use]
pub fn techniques(steps: &[String]) -> BTreeSet<String> {
    TECHNIQUES
        .iter()
        .filter(|technique| steps.iter().any(|step| step.contains(*technique)))
        .map(ToString::to_string)
        .collect()
}

/// Heuristic [0,1] effort estimate from step count, step verbosity, and
/// complexity-word presence.
///
/// `step_factor` saturates at 20 steps (weight 0.6), `length_factor` at 30
/// average words per step (weight 0.3), and `complexity_factor` at 5 steps
/// containing a complexity word (weight 0.1).
#[must_use]
pub fn effort_score(steps: &[String], n_steps: usize) -> f64 {
    let step_factor = (n_steps as f64 / 20.0).min(1.0) * 0.6;

    let avg_words = if steps.is_empty() {
        0.0
    } else {
        let total_words: usize = steps.iter().map(|s| s.split_whitespace().count()).sum();
        total_words as f64 / steps.len() as f64
    };
    let length_factor = (avg_words / 30.0).min(1.0) * 0.3;

    let complex_steps = steps
        .iter()
        .filter(|step| COMPLEXITY_WORDS.iter().any(|word| step.contains(word)))
        .count();
    let complexity_factor = (complex_steps as f64 / 5.0).min(1.0) * 0.1;

    step_factor + length_factor + complexity_factor
}

#[cfg(test)]
#[path = "steps_tests.rs"]
mod tests;

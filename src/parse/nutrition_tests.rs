use super::*;

use proptest::prelude::*;

// ========== parse Tests ==========

#[test]
fn test_parse_valid_seven_fields() {
    let parsed = parse("[400, 10, 5, 50, 20, 25, 800]");
    assert_eq!(parsed.len(), 7);
    assert_eq!(parsed["calories"], 400.0);
    assert_eq!(parsed["fat"], 10.0);
    assert_eq!(parsed["total_fat"], 5.0);
    assert_eq!(parsed["carbohydrates"], 50.0);
    assert_eq!(parsed["sugar"], 20.0);
    assert_eq!(parsed["protein"], 25.0);
    assert_eq!(parsed["sodium"], 800.0);
}

#[test]
fn test_parse_decimal_values() {
    let parsed = parse("[123.5, 1.2, 0.5, 10.0, 3.3, 8.8, 250.1]");
    assert_eq!(parsed["calories"], 123.5);
}

#[test]
fn test_parse_wrong_length_yields_empty() {
    assert!(parse("[400, 10, 5]").is_empty());
    assert!(parse("[1, 2, 3, 4, 5, 6, 7, 8]").is_empty());
}

#[test]
fn test_parse_malformed_yields_empty() {
    assert!(parse("not a list").is_empty());
    assert!(parse("['calories', 'fat']").is_empty());
    assert!(parse("").is_empty());
}

// ========== health_score Tests ==========

#[test]
fn test_health_score_empty_is_neutral() {
    assert_eq!(health_score(&BTreeMap::new()), 0.5);
}

#[test]
fn test_health_score_mild_values_at_least_neutral() {
    // All nutrients within mild ranges: no penalties apply.
    let parsed = parse("[400, 10, 5, 50, 20, 25, 800]");
    let score = health_score(&parsed);
    assert!(score >= 0.5);
    assert!(score <= 1.0);
}

#[test]
fn test_health_score_penalizes_extremes() {
    let heavy = parse("[2000, 80, 40, 200, 150, 5, 4000]");
    let light = parse("[300, 5, 2, 30, 10, 30, 400]");
    assert!(health_score(&heavy) < health_score(&light));
}

#[test]
fn test_health_score_protein_bonus_caps() {
    // 100g protein caps at the same bonus as 15g * 2 over the 0.3 ceiling.
    let high_protein = parse("[100, 1, 1, 10, 1, 100, 100]");
    let capped = parse("[100, 1, 1, 10, 1, 15, 100]");
    assert!(health_score(&high_protein) >= health_score(&capped));
    assert!(health_score(&high_protein) <= 1.0);
}

#[test]
fn test_health_score_rounded_two_decimals() {
    let parsed = parse("[700, 10, 5, 50, 20, 7, 800]");
    let score = health_score(&parsed);
    assert!((score * 100.0 - (score * 100.0).round()).abs() < 1e-9);
}

proptest! {
    #[test]
    fn prop_health_score_in_unit_interval(
        calories in 0.0f64..10_000.0,
        fat in 0.0f64..500.0,
        sugar in 0.0f64..1_000.0,
        protein in 0.0f64..500.0,
        sodium in 0.0f64..20_000.0,
    ) {
        let mut nutrition = BTreeMap::new();
        nutrition.insert("calories".to_string(), calories);
        nutrition.insert("fat".to_string(), fat);
        nutrition.insert("sugar".to_string(), sugar);
        nutrition.insert("protein".to_string(), protein);
        nutrition.insert("sodium".to_string(), sodium);

        let score = health_score(&nutrition);
        prop_assert!((0.0..=1.0).contains(&score));
    }
}

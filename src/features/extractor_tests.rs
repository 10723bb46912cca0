use super::*;

fn sample_raw() -> RawRecipe {
    RawRecipe {
        id: 101,
        name: Some("garlic chicken pasta".to_string()),
        minutes: Some(35),
        ingredients: "['2 cups fresh chicken breast', '1 tbsp olive oil', 'salt']".to_string(),
        nutrition: "[400, 10, 5, 50, 20, 25, 800]".to_string(),
        tags: "['dinner', 'main-dish', 'italian', 'healthy']".to_string(),
        steps: "['season the chicken carefully', 'simmer the sauce', 'bake at 400f']".to_string(),
        n_steps: 3,
        description: Some("a rich garlic pasta with tender chicken and more garlic".to_string()),
    }
}

// ========== extract Tests ==========

#[test]
fn test_extract_complete_record() {
    let extractor = FeatureExtractor::new();
    let features = extractor.extract(&sample_raw()).expect("valid record");

    assert_eq!(features.recipe_id, 101);
    assert!(features.ingredients.contains("chicken breast"));
    assert!(features.ingredients.contains("olive oil"));
    assert!(features.ingredients.contains("salt"));
    assert_eq!(features.nutrition["calories"], 400.0);
    assert_eq!(features.meal_type.as_deref(), Some("dinner"));
    assert_eq!(features.cuisine_type.as_deref(), Some("italian"));
    assert_eq!(features.dietary_restrictions, vec!["healthy"]);
    assert_eq!(features.n_steps, 3);
    assert!(features.cooking_techniques.contains("simmer"));
    assert!(features.cooking_techniques.contains("bake"));
    assert!((0.0..=1.0).contains(&features.effort_score));
    assert_eq!(features.description_keywords[0], "garlic");
}

#[test]
fn test_extract_categorizes_ingredients() {
    let extractor = FeatureExtractor::new();
    let features = extractor.extract(&sample_raw()).expect("valid record");

    assert!(features.ingredient_categories["proteins"].contains(&"chicken breast".to_string()));
    assert!(features.ingredient_categories["spices"].contains(&"salt".to_string()));
}

#[test]
fn test_extract_malformed_fields_degrade_to_defaults() {
    // Every list field malformed: the record still extracts with a valid
    // id and empty/neutral values everywhere else.
    let raw = RawRecipe {
        id: 7,
        ingredients: "not a list".to_string(),
        nutrition: "broken".to_string(),
        tags: "also broken".to_string(),
        steps: "nope".to_string(),
        n_steps: 0,
        ..RawRecipe::default()
    };

    let extractor = FeatureExtractor::new();
    let features = extractor.extract(&raw).expect("id is valid");

    assert_eq!(features.recipe_id, 7);
    assert!(features.ingredients.is_empty());
    assert!(features.ingredient_categories.is_empty());
    assert!(features.nutrition.is_empty());
    assert!(features.tags.is_empty());
    assert_eq!(features.meal_type, None);
    assert!(features.dietary_restrictions.is_empty());
    assert_eq!(features.cuisine_type, None);
    assert!(features.cooking_techniques.is_empty());
    assert!(features.description_keywords.is_empty());
    assert_eq!(features.effort_score, 0.0);
}

#[test]
fn test_extract_invalid_id_is_fatal() {
    let raw = RawRecipe {
        id: 0,
        ..sample_raw()
    };
    let extractor = FeatureExtractor::new();
    assert!(matches!(
        extractor.extract(&raw),
        Err(SazonarError::InvalidRecord { recipe_id: 0 })
    ));

    let raw = RawRecipe { id: -5, ..sample_raw() };
    assert!(extractor.extract(&raw).is_err());
}

#[test]
fn test_extract_missing_description() {
    let raw = RawRecipe {
        description: None,
        ..sample_raw()
    };
    let extractor = FeatureExtractor::new();
    let features = extractor.extract(&raw).expect("valid record");
    assert!(features.description_keywords.is_empty());
}

#[test]
fn test_extract_top_keywords_configurable() {
    let extractor = FeatureExtractor::new().with_top_keywords(1);
    let features = extractor.extract(&sample_raw()).expect("valid record");
    assert_eq!(features.description_keywords.len(), 1);
}

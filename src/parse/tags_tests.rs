use super::*;

fn tag_set(tags: &[&str]) -> BTreeSet<String> {
    tags.iter().map(ToString::to_string).collect()
}

// ========== parse Tests ==========

#[test]
fn test_parse_lowercases_and_trims() {
    let tags = parse("[' Dinner ', 'ITALIAN']");
    assert!(tags.contains("dinner"));
    assert!(tags.contains("italian"));
}

#[test]
fn test_parse_malformed_yields_empty() {
    assert!(parse("not a list").is_empty());
    assert!(parse("[1, 2]").is_empty());
}

// ========== meal_type Tests ==========

#[test]
fn test_meal_type_dinner_and_cuisine_italian() {
    // Concrete scenario: {"dinner", "main-dish", "italian"}.
    let tags = tag_set(&["dinner", "main-dish", "italian"]);
    assert_eq!(meal_type(&tags), Some("dinner"));
    assert_eq!(cuisine_type(&tags), Some("italian"));
}

#[test]
fn test_meal_type_priority_order() {
    // "main-dish" alone maps to lunch (first group that contains it).
    let tags = tag_set(&["main-dish"]);
    assert_eq!(meal_type(&tags), Some("lunch"));

    // breakfast outranks everything else.
    let tags = tag_set(&["main-dish", "brunch"]);
    assert_eq!(meal_type(&tags), Some("breakfast"));
}

#[test]
fn test_meal_type_snack() {
    let tags = tag_set(&["appetizers", "party"]);
    assert_eq!(meal_type(&tags), Some("snack"));
}

#[test]
fn test_meal_type_none() {
    let tags = tag_set(&["easy", "italian"]);
    assert_eq!(meal_type(&tags), None);
}

// ========== dietary_restrictions Tests ==========

#[test]
fn test_dietary_multiple_matches() {
    // "vegan" implies both vegetarian and vegan.
    let tags = tag_set(&["vegan", "low-fat"]);
    let restrictions = dietary_restrictions(&tags);
    assert_eq!(restrictions, vec!["vegetarian", "vegan", "healthy"]);
}

#[test]
fn test_dietary_single_match() {
    let tags = tag_set(&["gluten-free", "dinner"]);
    assert_eq!(dietary_restrictions(&tags), vec!["gluten-free"]);
}

#[test]
fn test_dietary_no_match() {
    let tags = tag_set(&["dinner", "easy"]);
    assert!(dietary_restrictions(&tags).is_empty());
}

// ========== cuisine_type Tests ==========

#[test]
fn test_cuisine_first_match_wins() {
    // "mexican" is declared before "italian".
    let tags = tag_set(&["italian", "mexican"]);
    assert_eq!(cuisine_type(&tags), Some("mexican"));
}

#[test]
fn test_cuisine_none() {
    let tags = tag_set(&["dinner", "easy"]);
    assert_eq!(cuisine_type(&tags), None);
}

// ========== time_constraint Tests ==========

#[test]
fn test_time_constraint_minutes() {
    assert_eq!(time_constraint(&tag_set(&["30-minutes-or-less"])), Some(30));
    assert_eq!(time_constraint(&tag_set(&["4-hours-or-less"])), Some(240));
}

#[test]
fn test_time_constraint_first_match() {
    let tags = tag_set(&["15-minutes-or-less", "60-minutes-or-less"]);
    assert_eq!(time_constraint(&tags), Some(15));
}

#[test]
fn test_time_constraint_none() {
    assert_eq!(time_constraint(&tag_set(&["dinner"])), None);
}

use super::*;

// ========== keywords Tests ==========

#[test]
fn test_keywords_most_frequent_first() {
    let text = "Smoky paprika chicken with paprika butter and more paprika. Chicken wins.";
    let keywords = keywords(Some(text), 3);
    assert_eq!(keywords[0], "paprika");
    assert_eq!(keywords[1], "chicken");
}

#[test]
fn test_keywords_ties_broken_by_first_seen() {
    let text = "zesty lemon braised fennel";
    let keywords = keywords(Some(text), 4);
    assert_eq!(keywords, vec!["zesty", "lemon", "braised", "fennel"]);
}

#[test]
fn test_keywords_drops_short_tokens() {
    let text = "an old oak pot of top ribs";
    let keywords = keywords(Some(text), 5);
    assert_eq!(keywords, vec!["ribs"]);
}

#[test]
fn test_keywords_drops_stop_words() {
    let text = "this recipe will make a wonderful dinner with friends";
    let keywords = keywords(Some(text), 5);
    assert!(!keywords.contains(&"this".to_string()));
    assert!(!keywords.contains(&"recipe".to_string()));
    assert!(keywords.contains(&"wonderful".to_string()));
    assert!(keywords.contains(&"dinner".to_string()));
}

#[test]
fn test_keywords_strips_punctuation() {
    let text = "garlic! garlic? garlic.";
    let keywords = keywords(Some(text), 1);
    assert_eq!(keywords, vec!["garlic"]);
}

#[test]
fn test_keywords_truncates_to_top_n() {
    let text = "alpha bravo charlie delta echo foxtrot golf hotel";
    let keywords = keywords(Some(text), 3);
    assert_eq!(keywords.len(), 3);
}

#[test]
fn test_keywords_missing_description() {
    assert!(keywords(None, 5).is_empty());
    assert!(keywords(Some(""), 5).is_empty());
}

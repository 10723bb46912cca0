use super::*;

// ========== StopWordsFilter Tests ==========

#[test]
fn test_culinary_filter_basic() {
    let filter = StopWordsFilter::culinary();
    let tokens = vec!["this", "smoky", "delicious", "brisket"];
    assert_eq!(filter.filter(&tokens), vec!["smoky", "brisket"]);
}

#[test]
fn test_culinary_filter_case_insensitive() {
    let filter = StopWordsFilter::culinary();
    assert!(filter.is_stop_word("Recipe"));
    assert!(filter.is_stop_word("DELICIOUS"));
    assert!(!filter.is_stop_word("Paprika"));
}

#[test]
fn test_custom_stop_words() {
    let filter = StopWordsFilter::new(["foo", "bar", "baz"]);
    let tokens = vec!["foo", "test", "bar", "data", "baz"];
    assert_eq!(filter.filter(&tokens), vec!["test", "data"]);
}

#[test]
fn test_empty_tokens() {
    let filter = StopWordsFilter::culinary();
    let tokens: Vec<&str> = vec![];
    assert_eq!(filter.filter(&tokens), Vec::<String>::new());
}

#[test]
fn test_all_stop_words() {
    let filter = StopWordsFilter::culinary();
    let tokens = vec!["this", "recipe", "that", "easy"];
    assert_eq!(filter.filter(&tokens), Vec::<String>::new());
}

#[test]
fn test_no_stop_words() {
    let filter = StopWordsFilter::culinary();
    let tokens = vec!["braised", "short", "ribs", "gremolata"];
    assert_eq!(filter.filter(&tokens), tokens);
}

#[test]
fn test_len_matches_const_table() {
    let filter = StopWordsFilter::culinary();
    assert_eq!(filter.len(), CULINARY_STOP_WORDS.len());
    assert!(!filter.is_empty());
}

#[test]
fn test_empty_filter() {
    let empty = StopWordsFilter::new(Vec::<String>::new());
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
}

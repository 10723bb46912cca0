use super::*;

use proptest::prelude::*;

// ========== jaccard_similarity Tests ==========

#[test]
fn test_jaccard_concrete_two_thirds() {
    // |{chicken, onion} ∩ {chicken, tomato, onion}| = 2, union = 3.
    let user = ["chicken", "onion"];
    let recipe = ["chicken", "tomato", "onion"];
    let sim = jaccard_similarity(&user, &recipe);
    assert!((sim - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_jaccard_identical_sets() {
    let a = ["salt", "pepper", "garlic"];
    assert_eq!(jaccard_similarity(&a, &a), 1.0);
}

#[test]
fn test_jaccard_disjoint_sets() {
    let a = ["salt"];
    let b = ["sugar"];
    assert_eq!(jaccard_similarity(&a, &b), 0.0);
}

#[test]
fn test_jaccard_empty_either_side() {
    let a = ["salt"];
    let empty: [&str; 0] = [];
    assert_eq!(jaccard_similarity(&empty, &a), 0.0);
    assert_eq!(jaccard_similarity(&a, &empty), 0.0);
    assert_eq!(jaccard_similarity(&empty, &empty), 0.0);
}

#[test]
fn test_jaccard_collapses_duplicates() {
    let a = ["salt", "salt", "pepper"];
    let b = ["salt", "pepper"];
    assert_eq!(jaccard_similarity(&a, &b), 1.0);
}

proptest! {
    #[test]
    fn prop_jaccard_in_unit_interval(
        a in proptest::collection::vec("[a-e]{1,3}", 0..12),
        b in proptest::collection::vec("[a-e]{1,3}", 0..12),
    ) {
        let sim = jaccard_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&sim));
    }

    #[test]
    fn prop_jaccard_self_is_one(a in proptest::collection::vec("[a-e]{1,3}", 1..12)) {
        let sim = jaccard_similarity(&a, &a);
        prop_assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_jaccard_symmetric(
        a in proptest::collection::vec("[a-e]{1,3}", 0..12),
        b in proptest::collection::vec("[a-e]{1,3}", 0..12),
    ) {
        prop_assert_eq!(jaccard_similarity(&a, &b), jaccard_similarity(&b, &a));
    }
}

// ========== cosine_similarity Tests ==========

#[test]
fn test_cosine_parallel_vectors() {
    let sim = cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).expect("same length");
    assert!((sim - 1.0).abs() < 1e-9);
}

#[test]
fn test_cosine_orthogonal_vectors() {
    let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).expect("same length");
    assert!(sim.abs() < 1e-9);
}

#[test]
fn test_cosine_zero_vector_is_zero() {
    let sim = cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).expect("same length");
    assert_eq!(sim, 0.0);
}

#[test]
fn test_cosine_length_mismatch_errors() {
    assert!(cosine_similarity(&[1.0], &[1.0, 2.0]).is_err());
}

#[test]
fn test_cosine_empty_errors() {
    assert!(cosine_similarity(&[], &[]).is_err());
}

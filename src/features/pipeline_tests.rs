use super::*;

fn valid_row(id: i64) -> RawRecipe {
    RawRecipe {
        id,
        name: Some(format!("recipe {id}")),
        minutes: Some(20),
        ingredients: "['salt', 'fresh garlic']".to_string(),
        nutrition: "[100, 5, 2, 10, 3, 8, 200]".to_string(),
        tags: "['dinner']".to_string(),
        steps: "['mix everything', 'bake']".to_string(),
        n_steps: 2,
        description: Some("tasty weeknight garlic bake".to_string()),
    }
}

// ========== process_chunk Tests ==========

#[test]
fn test_process_chunk_all_valid() {
    let pipeline = FeaturePipeline::new(FeatureExtractor::new());
    let rows: Vec<RawRecipe> = (1..=5).map(valid_row).collect();
    let processed = pipeline.process_chunk(&rows);
    assert_eq!(processed.len(), 5);
}

#[test]
fn test_process_chunk_skips_invalid_rows() {
    let pipeline = FeaturePipeline::new(FeatureExtractor::new());
    let rows = vec![valid_row(1), valid_row(0), valid_row(2), valid_row(-3)];
    let processed = pipeline.process_chunk(&rows);

    let ids: Vec<i64> = processed.iter().map(|p| p.features.recipe_id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_process_chunk_merges_metadata() {
    let pipeline = FeaturePipeline::new(FeatureExtractor::new());
    let processed = pipeline.process_chunk(&[valid_row(9)]);

    assert_eq!(processed[0].name.as_deref(), Some("recipe 9"));
    assert_eq!(processed[0].minutes, Some(20));
    assert_eq!(processed[0].n_ingredients, 2);
    assert!(processed[0].description.is_some());
}

// ========== run Tests ==========

#[test]
fn test_run_output_never_longer_than_input() {
    let pipeline = FeaturePipeline::new(FeatureExtractor::new()).with_chunk_size(3);
    let mut rows: Vec<RawRecipe> = (1..=20).map(valid_row).collect();
    rows[4].id = 0; // one invalid row
    rows[11].id = -1; // another

    let processed = pipeline.run(&rows);
    assert!(processed.len() <= rows.len());
    assert_eq!(processed.len(), 18);
}

#[test]
fn test_run_output_ids_subset_of_input() {
    let pipeline = FeaturePipeline::new(FeatureExtractor::new()).with_chunk_size(4);
    let rows: Vec<RawRecipe> = (1..=10).map(valid_row).collect();
    let input_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

    let processed = pipeline.run(&rows);
    for p in &processed {
        assert!(input_ids.contains(&p.features.recipe_id));
    }
}

#[test]
fn test_run_preserves_input_order() {
    let pipeline = FeaturePipeline::new(FeatureExtractor::new()).with_chunk_size(2);
    let rows: Vec<RawRecipe> = (1..=7).map(valid_row).collect();
    let processed = pipeline.run(&rows);

    let ids: Vec<i64> = processed.iter().map(|p| p.features.recipe_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_run_empty_input() {
    let pipeline = FeaturePipeline::new(FeatureExtractor::new());
    assert!(pipeline.run(&[]).is_empty());
}

#[test]
fn test_chunk_size_floor_is_one() {
    let pipeline = FeaturePipeline::new(FeatureExtractor::new()).with_chunk_size(0);
    let rows: Vec<RawRecipe> = (1..=3).map(valid_row).collect();
    assert_eq!(pipeline.run(&rows).len(), 3);
}

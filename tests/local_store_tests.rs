// tests/local_store_tests.rs
//
// INTEGRATION TESTS: file-backed recipe store
//
// Every test gets its own temp directory; a store instance is
// single-threaded per the storage contract.

use std::collections::BTreeSet;
use std::fs;

use souschef::{
    AppError, Difficulty, FileRecipeStore, Ingredient, Recipe, RecipeCategory, RecipeStep,
    RecipeStore,
};

fn store() -> (tempfile::TempDir, FileRecipeStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileRecipeStore::new(dir.path());
    (dir, store)
}

fn sample_recipe(name: &str) -> Recipe {
    let mut recipe = Recipe::new(name.to_string(), format!("How to make {}", name));
    recipe.cook_time_minutes = 25;
    recipe.servings = 4;
    recipe.difficulty = Difficulty::Medium;
    recipe.ingredients = vec![
        Ingredient {
            name: "onion".to_string(),
            quantity: "1".to_string(),
            notes: None,
        },
        Ingredient {
            name: "olive oil".to_string(),
            quantity: "2 tbsp".to_string(),
            notes: Some("extra virgin".to_string()),
        },
    ];
    recipe.steps = vec![
        RecipeStep {
            number: 1,
            instruction: "Chop the onion".to_string(),
            duration_minutes: Some(5),
            media: Vec::new(),
            tips: None,
        },
        RecipeStep {
            number: 2,
            instruction: "Fry until golden".to_string(),
            duration_minutes: Some(10),
            media: Vec::new(),
            tips: Some("Medium heat".to_string()),
        },
    ];
    recipe
}

// ============================================================================
// Save / load round-trip
// ============================================================================

#[test]
fn test_save_assigns_id_and_round_trips() {
    let (_dir, store) = store();
    let original = sample_recipe("Tacos");

    let id = store.save(original.clone()).unwrap();
    assert!(!id.is_empty());

    let loaded = store.get_by_id(&id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.name, "Tacos");
    assert_eq!(loaded.ingredients, original.ingredients);
    assert_eq!(loaded.steps, original.steps);
    assert!(loaded.is_custom);
    assert!(loaded.created_at.is_some());
    assert!(loaded.updated_at.is_some());
    assert!(loaded.updated_at >= loaded.created_at);
}

#[test]
fn test_saved_record_lands_in_custom_partition() {
    let (dir, store) = store();
    let id = store.save(sample_recipe("Tacos")).unwrap();

    assert!(dir
        .path()
        .join("custom")
        .join(format!("recipe_{}.json", id))
        .exists());
    assert!(dir.path().join("recipes_index.json").exists());
}

#[test]
fn test_save_keeps_existing_id() {
    let (_dir, store) = store();
    let mut recipe = sample_recipe("Tacos");
    recipe.id = "my-taco-id".to_string();

    let id = store.save(recipe).unwrap();
    assert_eq!(id, "my-taco-id");
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn test_update_requires_existing_id() {
    let (_dir, store) = store();
    let mut ghost = sample_recipe("Ghost");
    ghost.id = "never-saved".to_string();

    let result = store.update(ghost);
    assert!(matches!(result, Err(AppError::NotFound)));
    assert_eq!(store.get_all().unwrap().len(), 0);
    assert_eq!(store.index_entry_count().unwrap(), 0);
}

#[test]
fn test_update_rewrites_in_place() {
    let (_dir, store) = store();
    let id = store.save(sample_recipe("Tacos")).unwrap();

    let mut changed = store.get_by_id(&id).unwrap().unwrap();
    changed.name = "Tacos al Pastor".to_string();
    store.update(changed).unwrap();

    let loaded = store.get_by_id(&id).unwrap().unwrap();
    assert_eq!(loaded.name, "Tacos al Pastor");
    assert!(loaded.is_custom);
    assert_eq!(store.index_entry_count().unwrap(), 1);
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn test_delete_is_idempotent() {
    let (_dir, store) = store();
    let id = store.save(sample_recipe("Tacos")).unwrap();

    store.delete(&id).unwrap();
    assert!(store.get_by_id(&id).unwrap().is_none());
    assert_eq!(store.index_entry_count().unwrap(), 0);

    // Second delete of the same id, and of an id never known, both succeed
    store.delete(&id).unwrap();
    store.delete("never-existed").unwrap();
    assert_eq!(store.index_entry_count().unwrap(), 0);
}

// ============================================================================
// Bundled partition
// ============================================================================

#[test]
fn test_save_bundled_assigns_positional_ids() {
    let (_dir, store) = store();

    store
        .save_bundled(vec![sample_recipe("X"), sample_recipe("Y")])
        .unwrap();

    let mut ids: Vec<String> = store.get_all().unwrap().iter().map(|r| r.id.clone()).collect();
    ids.sort();
    assert_eq!(ids, vec!["001".to_string(), "002".to_string()]);
    assert!(store.get_all().unwrap().iter().all(|r| !r.is_custom));
}

#[test]
fn test_save_bundled_replaces_partition_and_preserves_custom() {
    let (dir, store) = store();

    store
        .save_bundled(vec![sample_recipe("Old A"), sample_recipe("Old B")])
        .unwrap();
    let custom_id = store.save(sample_recipe("Mine")).unwrap();

    let mut replacement = sample_recipe("New A");
    replacement.id = "remote-1".to_string();
    store.save_bundled(vec![replacement]).unwrap();

    let all = store.get_all().unwrap();
    let ids: BTreeSet<String> = all.iter().map(|r| r.id.clone()).collect();
    let expected: BTreeSet<String> =
        ["remote-1".to_string(), custom_id.clone()].into_iter().collect();
    assert_eq!(ids, expected);

    // Old bundled files are physically gone
    assert!(!dir.path().join("bundled").join("recipe_001.json").exists());
    assert!(dir
        .path()
        .join("custom")
        .join(format!("recipe_{}.json", custom_id))
        .exists());
}

#[test]
fn test_save_remote_lands_in_bundled_partition() {
    let (dir, store) = store();
    let mut fetched = sample_recipe("Ramen");
    fetched.id = "r42".to_string();

    store.save_remote(fetched).unwrap();

    let cached = store.get_by_id("r42").unwrap().unwrap();
    assert!(!cached.is_custom);
    assert!(dir.path().join("bundled").join("recipe_r42.json").exists());
    assert_eq!(store.index_entry_count().unwrap(), 1);
}

#[test]
fn test_save_remote_requires_id() {
    let (_dir, store) = store();
    let result = store.save_remote(sample_recipe("No Id"));
    assert!(result.is_err());
    assert_eq!(store.index_entry_count().unwrap(), 0);
}

#[test]
fn test_bundled_id_collision_keeps_custom_recipe() {
    let (_dir, store) = store();
    let mut mine = sample_recipe("My Chili");
    mine.id = "chili".to_string();
    store.save(mine).unwrap();

    let mut from_origin = sample_recipe("Origin Chili");
    from_origin.id = "chili".to_string();
    store.save_bundled(vec![from_origin]).unwrap();

    // One index entry per id, and the custom recipe wins
    assert_eq!(store.index_entry_count().unwrap(), 1);
    let kept = store.get_by_id("chili").unwrap().unwrap();
    assert_eq!(kept.name, "My Chili");
    assert!(kept.is_custom);
}

#[test]
fn test_clear_all_empties_everything() {
    let (_dir, store) = store();
    store.save_bundled(vec![sample_recipe("A")]).unwrap();
    store.save(sample_recipe("B")).unwrap();

    store.clear_all().unwrap();

    assert!(store.get_all().unwrap().is_empty());
    assert_eq!(store.index_entry_count().unwrap(), 0);
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_search_is_case_insensitive() {
    let (_dir, store) = store();
    let mut recipe = sample_recipe("Chocolate Cake");
    recipe.description = "Rich and dark".to_string();
    store.save(recipe).unwrap();
    store.save(sample_recipe("Lemon Tart")).unwrap();

    let upper = store.search("CHOCOLATE").unwrap();
    let lower = store.search("chocolate").unwrap();
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].name, lower[0].name);
}

#[test]
fn test_search_matches_ingredient_names() {
    let (_dir, store) = store();
    let mut with_bacon = sample_recipe("Carbonara");
    with_bacon.ingredients.push(Ingredient {
        name: "bacon".to_string(),
        quantity: "100g".to_string(),
        notes: None,
    });
    store.save(with_bacon).unwrap();
    store.save(sample_recipe("Fruit Salad")).unwrap();

    let found = store.search("bacon").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Carbonara");
}

#[test]
fn test_empty_query_matches_everything() {
    let (_dir, store) = store();
    store.save(sample_recipe("A")).unwrap();
    store.save(sample_recipe("B")).unwrap();

    assert_eq!(store.search("").unwrap().len(), 2);
}

#[test]
fn test_by_category_filters_exactly() {
    let (_dir, store) = store();

    let mut dinner = sample_recipe("Lasagna");
    dinner.categories.insert(RecipeCategory::Dinner);
    dinner.categories.insert(RecipeCategory::Italian);
    store.save(dinner).unwrap();

    let mut dessert = sample_recipe("Tiramisu");
    dessert.categories.insert(RecipeCategory::Dessert);
    dessert.categories.insert(RecipeCategory::Italian);
    store.save(dessert).unwrap();

    let dinners = store.by_category(RecipeCategory::Dinner).unwrap();
    assert_eq!(dinners.len(), 1);
    assert_eq!(dinners[0].name, "Lasagna");

    let italian = store.by_category(RecipeCategory::Italian).unwrap();
    assert_eq!(italian.len(), 2);

    // Matches the subset of get_all for any category
    let all = store.get_all().unwrap();
    let expected: Vec<&Recipe> = all
        .iter()
        .filter(|r| r.categories.contains(&RecipeCategory::Dessert))
        .collect();
    let desserts = store.by_category(RecipeCategory::Dessert).unwrap();
    assert_eq!(desserts.len(), expected.len());
}

// ============================================================================
// Index consistency & self-healing
// ============================================================================

#[test]
fn test_index_consistency() {
    let (_dir, store) = store();
    store.save_bundled(vec![sample_recipe("A"), sample_recipe("B")]).unwrap();
    store.save(sample_recipe("C")).unwrap();

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), store.index_entry_count().unwrap());

    let mut ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), all.len());
}

#[test]
fn test_corrupt_index_self_heals() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("recipes_index.json"), "{not valid json!").unwrap();

    let store = FileRecipeStore::new(dir.path());
    assert!(store.get_all().unwrap().is_empty());

    // The store is fully usable after healing
    let id = store.save(sample_recipe("Tacos")).unwrap();
    assert!(store.get_by_id(&id).unwrap().is_some());
}

#[test]
fn test_malformed_record_is_skipped() {
    let (dir, store) = store();
    let keep = store.save(sample_recipe("Good")).unwrap();
    let broken = store.save(sample_recipe("Bad")).unwrap();

    fs::write(
        dir.path().join("custom").join(format!("recipe_{}.json", broken)),
        "garbage",
    )
    .unwrap();

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep);

    // Single-record load of the broken file is absent, not an error
    assert!(store.get_by_id(&broken).unwrap().is_none());
}

#[test]
fn test_missing_record_file_is_skipped() {
    let (dir, store) = store();
    store.save(sample_recipe("A")).unwrap();
    let gone = store.save(sample_recipe("B")).unwrap();

    fs::remove_file(dir.path().join("custom").join(format!("recipe_{}.json", gone))).unwrap();

    assert_eq!(store.get_all().unwrap().len(), 1);
}

#[test]
fn test_fresh_instance_reads_same_root() {
    let (dir, store) = store();
    let id = store.save(sample_recipe("Tacos")).unwrap();

    let reopened = FileRecipeStore::new(dir.path());
    let loaded = reopened.get_by_id(&id).unwrap().unwrap();
    assert_eq!(loaded.name, "Tacos");
}

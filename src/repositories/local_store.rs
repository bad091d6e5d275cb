// src/repositories/local_store.rs
//
// File-backed recipe persistence.
//
// Layout under the store root:
//   recipes_index.json       - the index document (see index.rs)
//   bundled/recipe_<id>.json - origin-seeded records, replaced wholesale
//   custom/recipe_<id>.json  - user-authored records, preserved on reseed
//
// CRITICAL RULES:
// - All listing goes through the index, never a directory scan
// - A malformed record is skipped on read, never a collection-wide failure
// - A corrupt or missing index self-heals to an empty one
// - One store instance per root; writers must be externally serialized

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use log::warn;
use uuid::Uuid;

use crate::domain::{validate_recipe, Recipe, RecipeCategory};
use crate::error::{AppError, AppResult};
use crate::repositories::index::{IndexEntry, RecipeIndex};

const INDEX_FILE: &str = "recipes_index.json";
const BUNDLED_DIR: &str = "bundled";
const CUSTOM_DIR: &str = "custom";

pub trait RecipeStore: Send + Sync {
    /// Best-effort load of every indexed recipe; unreadable records are skipped
    fn get_all(&self) -> AppResult<Vec<Recipe>>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<Recipe>>;
    /// Case-insensitive substring match over name, description and
    /// ingredient names. The empty query matches everything (the empty
    /// string is a substring of every string).
    fn search(&self, query: &str) -> AppResult<Vec<Recipe>>;
    fn by_category(&self, category: RecipeCategory) -> AppResult<Vec<Recipe>>;
    /// Persist a user-authored recipe; assigns a fresh id when empty.
    /// Returns the (possibly assigned) id.
    fn save(&self, recipe: Recipe) -> AppResult<String>;
    /// Rewrite an existing recipe in place; NotFound if the id was never saved
    fn update(&self, recipe: Recipe) -> AppResult<()>;
    /// Idempotent: deleting an unknown id succeeds
    fn delete(&self, id: &str) -> AppResult<()>;
    /// Replace the entire bundled partition, preserving custom entries
    fn save_bundled(&self, recipes: Vec<Recipe>) -> AppResult<()>;
    /// Persist one remote-origin recipe into the bundled partition,
    /// keeping `is_custom = false`. Used when a forced fetch returns an id
    /// the index does not know yet.
    fn save_remote(&self, recipe: Recipe) -> AppResult<()>;
    fn clear_all(&self) -> AppResult<()>;
    fn index_entry_count(&self) -> AppResult<usize>;
}

pub struct FileRecipeStore {
    root: PathBuf,
    /// In-memory copy of the index, refreshed on every mutation before the
    /// mutating call returns. Single shared mutable slot per instance.
    index_cache: Mutex<Option<RecipeIndex>>,
}

impl FileRecipeStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            index_cache: Mutex::new(None),
        }
    }

    /// Per-user default storage root (`<data dir>/souschef/recipes`)
    pub fn default_root() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("souschef").join("recipes"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    fn bundled_record_path(id: &str) -> String {
        format!("{}/recipe_{}.json", BUNDLED_DIR, id)
    }

    fn custom_record_path(id: &str) -> String {
        format!("{}/recipe_{}.json", CUSTOM_DIR, id)
    }

    /// Load the index, self-healing to an empty one on a missing or
    /// unparsable file. Cached per instance.
    fn load_index(&self) -> RecipeIndex {
        let mut cache = self.index_cache.lock().unwrap();
        if let Some(index) = cache.as_ref() {
            return index.clone();
        }

        let index = match fs::read_to_string(self.index_path()) {
            Ok(raw) => match serde_json::from_str::<RecipeIndex>(&raw) {
                Ok(index) => index,
                Err(e) => {
                    warn!("Recipe index is corrupt, starting from empty: {}", e);
                    RecipeIndex::empty()
                }
            },
            Err(_) => RecipeIndex::empty(),
        };

        *cache = Some(index.clone());
        index
    }

    /// Write the index to disk and refresh the in-memory copy.
    /// Must be the last step of every mutating operation.
    fn persist_index(&self, index: RecipeIndex) -> AppResult<()> {
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(&index)?;
        fs::write(self.index_path(), json)?;

        let mut cache = self.index_cache.lock().unwrap();
        *cache = Some(index);
        Ok(())
    }

    /// Load one record by its index-relative path; None on any failure
    /// (missing or malformed records are skipped, not surfaced).
    fn load_record(&self, relative_path: &str) -> Option<Recipe> {
        let path = self.root.join(relative_path);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Skipping unreadable recipe record {:?}: {}", path, e);
                return None;
            }
        };
        match serde_json::from_str::<Recipe>(&raw) {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                warn!("Skipping malformed recipe record {:?}: {}", path, e);
                None
            }
        }
    }

    fn write_record(&self, recipe: &Recipe, relative_path: &str) -> AppResult<()> {
        let path = self.root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Pretty-printed, all optionals written explicitly as null, so
        // round-trips are byte-stable for unset fields.
        let json = serde_json::to_string_pretty(recipe)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Remove a record file; an already-absent file is not an error
    fn remove_record(&self, relative_path: &str) -> AppResult<()> {
        match fs::remove_file(self.root.join(relative_path)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Remove a whole partition directory; absent directory is fine
    fn remove_partition(&self, dir: &str) -> AppResult<()> {
        match fs::remove_dir_all(self.root.join(dir)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

impl RecipeStore for FileRecipeStore {
    fn get_all(&self) -> AppResult<Vec<Recipe>> {
        let index = self.load_index();
        let recipes = index
            .recipes
            .iter()
            .filter_map(|entry| self.load_record(&entry.file_path))
            .collect();
        Ok(recipes)
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<Recipe>> {
        let index = self.load_index();
        Ok(index
            .find(id)
            .and_then(|entry| self.load_record(&entry.file_path)))
    }

    fn search(&self, query: &str) -> AppResult<Vec<Recipe>> {
        let needle = query.to_lowercase();
        let recipes = self
            .get_all()?
            .into_iter()
            .filter(|recipe| {
                recipe.name.to_lowercase().contains(&needle)
                    || recipe.description.to_lowercase().contains(&needle)
                    || recipe
                        .ingredients
                        .iter()
                        .any(|ingredient| ingredient.name.to_lowercase().contains(&needle))
            })
            .collect();
        Ok(recipes)
    }

    fn by_category(&self, category: RecipeCategory) -> AppResult<Vec<Recipe>> {
        let index = self.load_index();
        let recipes = index
            .recipes
            .iter()
            .filter(|entry| entry.categories.contains(&category))
            .filter_map(|entry| self.load_record(&entry.file_path))
            .collect();
        Ok(recipes)
    }

    fn save(&self, mut recipe: Recipe) -> AppResult<String> {
        if !recipe.has_id() {
            recipe.id = Uuid::new_v4().to_string();
        }
        recipe.is_custom = true;

        let now = Utc::now();
        if recipe.created_at.is_none() {
            recipe.created_at = Some(now);
        }
        recipe.updated_at = Some(now);

        validate_recipe(&recipe)?;

        let relative_path = Self::custom_record_path(&recipe.id);
        self.write_record(&recipe, &relative_path)?;

        let mut index = self.load_index();
        index.upsert(IndexEntry::from_recipe(&recipe, relative_path));
        self.persist_index(index)?;

        Ok(recipe.id)
    }

    fn update(&self, mut recipe: Recipe) -> AppResult<()> {
        let mut index = self.load_index();
        let existing = index.find(&recipe.id).cloned().ok_or(AppError::NotFound)?;

        // The existing entry owns the partition and the custom flag;
        // the record is rewritten in place.
        recipe.is_custom = existing.is_custom;
        recipe.updated_at = Some(Utc::now());

        validate_recipe(&recipe)?;

        self.write_record(&recipe, &existing.file_path)?;

        index.upsert(IndexEntry::from_recipe(&recipe, existing.file_path));
        self.persist_index(index)?;
        Ok(())
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        let mut index = self.load_index();
        if let Some(entry) = index.find(id).cloned() {
            self.remove_record(&entry.file_path)?;
            index.remove(id);
            self.persist_index(index)?;
        }
        Ok(())
    }

    fn save_bundled(&self, recipes: Vec<Recipe>) -> AppResult<()> {
        let mut index = self.load_index();
        index.recipes.retain(|entry| entry.is_custom);
        let custom_ids: HashSet<String> =
            index.recipes.iter().map(|entry| entry.id.clone()).collect();

        // Replace the bundled partition wholesale
        self.remove_partition(BUNDLED_DIR)?;

        for (position, mut recipe) in recipes.into_iter().enumerate() {
            if !recipe.has_id() {
                // Positional, zero-padded fallback id ("001", "002", ...),
                // deterministic for a given input list
                recipe.id = format!("{:03}", position + 1);
            }
            // Custom wins on an id collision; the index keeps one entry per id
            if custom_ids.contains(&recipe.id) {
                warn!(
                    "Bundled recipe {} collides with a custom recipe, keeping the custom one",
                    recipe.id
                );
                continue;
            }
            recipe.is_custom = false;

            let relative_path = Self::bundled_record_path(&recipe.id);
            self.write_record(&recipe, &relative_path)?;
            index
                .recipes
                .push(IndexEntry::from_recipe(&recipe, relative_path));
        }

        index.touch();
        self.persist_index(index)?;
        Ok(())
    }

    fn save_remote(&self, mut recipe: Recipe) -> AppResult<()> {
        if !recipe.has_id() {
            return Err(AppError::Other(
                "Remote recipe is missing an id".to_string(),
            ));
        }
        recipe.is_custom = false;

        let relative_path = Self::bundled_record_path(&recipe.id);
        self.write_record(&recipe, &relative_path)?;

        let mut index = self.load_index();
        index.upsert(IndexEntry::from_recipe(&recipe, relative_path));
        self.persist_index(index)?;
        Ok(())
    }

    fn clear_all(&self) -> AppResult<()> {
        self.remove_partition(BUNDLED_DIR)?;
        self.remove_partition(CUSTOM_DIR)?;
        self.persist_index(RecipeIndex::empty())?;
        Ok(())
    }

    fn index_entry_count(&self) -> AppResult<usize> {
        Ok(self.load_index().recipes.len())
    }
}

// src/repositories/index.rs
//
// The recipe index: one denormalized document enumerating every stored
// recipe and where its record lives. It is a cache over the record files
// (rebuildable from them), but it is authoritative for listing - readers
// never scan storage directly.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::{Recipe, RecipeCategory};

/// Current on-disk index schema version
pub const INDEX_VERSION: u32 = 1;

/// Summary row for one stored recipe.
///
/// INVARIANT: every stored record has exactly one entry; every entry's
/// `file_path` is relative to the store root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub id: String,
    pub name: String,
    pub file_path: String,
    pub categories: Vec<RecipeCategory>,
    pub is_custom: bool,
    pub thumbnail: Option<String>,
}

impl IndexEntry {
    /// Build the entry for a recipe stored at `file_path`
    pub fn from_recipe(recipe: &Recipe, file_path: String) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            file_path,
            categories: recipe.categories.iter().copied().collect(),
            is_custom: recipe.is_custom,
            thumbnail: recipe.thumbnail(),
        }
    }
}

/// The persisted index document (`recipes_index.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIndex {
    pub version: u32,
    /// Epoch milliseconds of the last mutation
    pub last_updated: i64,
    pub recipes: Vec<IndexEntry>,
}

impl RecipeIndex {
    pub fn empty() -> Self {
        Self {
            version: INDEX_VERSION,
            last_updated: 0,
            recipes: Vec::new(),
        }
    }

    pub fn find(&self, id: &str) -> Option<&IndexEntry> {
        self.recipes.iter().find(|entry| entry.id == id)
    }

    /// Insert the entry, replacing any prior entry with the same id
    pub fn upsert(&mut self, entry: IndexEntry) {
        self.recipes.retain(|existing| existing.id != entry.id);
        self.recipes.push(entry);
        self.touch();
    }

    /// Remove the entry for `id`; returns whether one existed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|entry| entry.id != id);
        let removed = self.recipes.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    pub fn touch(&mut self) {
        self.last_updated = Utc::now().timestamp_millis();
    }
}

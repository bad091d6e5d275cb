// src/services/recipe_service.rs
//
// Cache-first recipe access coordinating the local store and the remote
// origin.
//
// CRITICAL RULES:
// - Ordinary reads and writes NEVER touch the remote source
// - refresh() is the only full reconciliation and must be caller-triggered
// - Custom recipes survive every refresh untouched
// - A failed cache write never invalidates freshly fetched data

use std::sync::Arc;

use log::{debug, warn};

use crate::domain::{Recipe, RecipeCategory};
use crate::error::AppResult;
use crate::integrations::remote::RecipeRemoteSource;
use crate::repositories::RecipeStore;

pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
    remote: Arc<dyn RecipeRemoteSource>,
}

impl RecipeService {
    pub fn new(store: Arc<dyn RecipeStore>, remote: Arc<dyn RecipeRemoteSource>) -> Self {
        Self { store, remote }
    }

    // ========================================================================
    // Cache-only operations (no remote interaction, by contract)
    // ========================================================================

    pub fn get_all(&self) -> AppResult<Vec<Recipe>> {
        self.store.get_all()
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<Option<Recipe>> {
        self.store.get_by_id(id)
    }

    pub fn search(&self, query: &str) -> AppResult<Vec<Recipe>> {
        self.store.search(query)
    }

    pub fn by_category(&self, category: RecipeCategory) -> AppResult<Vec<Recipe>> {
        self.store.by_category(category)
    }

    pub fn save(&self, recipe: Recipe) -> AppResult<String> {
        self.store.save(recipe)
    }

    pub fn update(&self, recipe: Recipe) -> AppResult<()> {
        self.store.update(recipe)
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        self.store.delete(id)
    }

    // ========================================================================
    // Remote reconciliation
    // ========================================================================

    /// Reconcile the local store against the remote origin.
    ///
    /// The bundled partition is replaced wholesale by the fetched set;
    /// custom recipes are preserved exactly as they were. A remote failure
    /// aborts without mutating the store. A failed cache write is reported
    /// but the fetched set is still returned: the in-memory result is
    /// authoritative, cache durability is best-effort.
    pub async fn refresh(&self) -> AppResult<Vec<Recipe>> {
        let custom: Vec<Recipe> = self
            .store
            .get_all()?
            .into_iter()
            .filter(|recipe| recipe.is_custom)
            .collect();

        let fresh = self.remote.fetch_all().await?;

        if let Err(e) = self.store.save_bundled(fresh.clone()) {
            warn!("Failed to cache refreshed recipes, returning fetched set anyway: {}", e);
        }

        let mut result = fresh;
        result.extend(custom);
        Ok(result)
    }

    /// Read one recipe, optionally forcing a fetch from the origin.
    ///
    /// With `force_refresh` the remote copy wins when reachable (persisted
    /// best-effort); the cached copy is the fallback when the origin fails
    /// or does not know the id.
    pub async fn get_by_id_with_refresh(
        &self,
        id: &str,
        force_refresh: bool,
    ) -> AppResult<Option<Recipe>> {
        if !force_refresh {
            return self.store.get_by_id(id);
        }

        match self.remote.fetch_by_id(id).await {
            Ok(Some(recipe)) => {
                self.cache_fetched(recipe.clone());
                Ok(Some(recipe))
            }
            Ok(None) => {
                debug!("Origin does not know recipe {}, using cached copy", id);
                self.store.get_by_id(id)
            }
            Err(e) => {
                warn!("Remote fetch for recipe {} failed, using cached copy: {}", id, e);
                self.store.get_by_id(id)
            }
        }
    }

    /// Best-effort persistence of a remotely fetched recipe.
    /// An id unknown to the index is cached as remote-origin, never as
    /// custom: is_custom stays owned by the write path, not by the caller.
    fn cache_fetched(&self, recipe: Recipe) {
        let result = match self.store.update(recipe.clone()) {
            Err(crate::error::AppError::NotFound) => self.store.save_remote(recipe),
            other => other,
        };
        if let Err(e) = result {
            warn!("Failed to cache remotely fetched recipe: {}", e);
        }
    }
}

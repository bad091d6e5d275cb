// src/integrations/remote/mod.rs
//
// The remote recipe source capability.
//
// The service layer only exercises fetch_all (refresh) and fetch_by_id
// (forced single-recipe refresh); the write surface exists for the
// publishing flows layered on top of this crate.

use async_trait::async_trait;

use crate::domain::{Recipe, RecipeCategory};
use crate::error::AppResult;

mod client;

pub use client::HttpRecipeSource;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRemoteSource: Send + Sync {
    /// Fetch the full authoritative recipe set
    async fn fetch_all(&self) -> AppResult<Vec<Recipe>>;

    /// Fetch one recipe; Ok(None) when the origin does not know the id
    async fn fetch_by_id(&self, id: &str) -> AppResult<Option<Recipe>>;

    async fn search(&self, query: &str) -> AppResult<Vec<Recipe>>;

    async fn fetch_by_category(&self, category: RecipeCategory) -> AppResult<Vec<Recipe>>;

    /// Publish a recipe to the origin; returns the origin-assigned id
    async fn upload(&self, recipe: &Recipe) -> AppResult<String>;

    async fn update(&self, recipe: &Recipe) -> AppResult<()>;

    async fn delete(&self, id: &str) -> AppResult<()>;
}

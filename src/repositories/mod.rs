// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic beyond the storage contract
// - NO event emission
// - NO remote-source calls (the service layer owns those)
// - The index is the only enumeration of what exists on disk

pub mod index;
pub mod local_store;

pub use index::{IndexEntry, RecipeIndex};
pub use local_store::{FileRecipeStore, RecipeStore};

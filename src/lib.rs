// src/lib.rs
// SousChef - Voice-driven cooking assistant core
//
// Architecture:
// - Domain-centric: the Recipe model and its invariants live in domain/
// - Cache-first: ordinary reads/writes only ever touch the local store;
//   remote reconciliation is explicit and caller-triggered
// - Explicit: typed results at every public boundary, no hidden behavior
// - Local-first: user-authored recipes survive every refresh

pub mod domain;
pub mod error;
pub mod integrations;
pub mod repositories;
pub mod services;
pub mod voice;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_recipe, Difficulty, Ingredient, Recipe, RecipeCategory, RecipeStep,
};

// ============================================================================
// PUBLIC API - Storage & Coordination
// ============================================================================

pub use repositories::{FileRecipeStore, IndexEntry, RecipeIndex, RecipeStore};

pub use services::RecipeService;

pub use integrations::{HttpRecipeSource, RecipeRemoteSource};

// ============================================================================
// PUBLIC API - Voice Pipeline
// ============================================================================

pub use voice::{
    extract_step_number, PatternTable, VoiceCommand, VoiceCommandTranslator, DEFAULT_LANGUAGE,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

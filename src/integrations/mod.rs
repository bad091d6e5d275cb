// src/integrations/mod.rs
//
// External integrations
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Integrations never mutate local state; services own coordination
// - All external-API concerns (transport, auth, status codes) live here

pub mod remote;

pub use remote::{HttpRecipeSource, RecipeRemoteSource};

// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod recipe_service;


pub use recipe_service::RecipeService;

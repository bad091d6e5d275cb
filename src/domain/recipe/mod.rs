pub mod entity;
pub mod invariants;

pub use entity::{Difficulty, Ingredient, Recipe, RecipeCategory, RecipeStep};
pub use invariants::validate_recipe;

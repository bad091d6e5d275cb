use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recipe: the root entity of the cooking assistant.
///
/// Identity is a string id, immutable once assigned. A freshly authored
/// recipe carries an empty id until the store persists it; the save path
/// assigns a UUID, the bundled-seed path assigns a positional id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Globally unique identifier; empty string means "not yet persisted"
    pub id: String,

    pub name: String,

    pub description: String,

    /// Reference to the main photo (path or URL), if any
    pub main_photo: Option<String>,

    /// Ordered list of ingredients
    pub ingredients: Vec<Ingredient>,

    /// Ordered, 1-based preparation steps
    pub steps: Vec<RecipeStep>,

    /// Total cooking/prep time in minutes
    pub cook_time_minutes: u32,

    pub servings: u32,

    pub difficulty: Difficulty,

    /// Classification tags; set semantics, stable serialization order
    pub categories: BTreeSet<RecipeCategory>,

    /// Free-form tag strings
    pub tags: Vec<String>,

    /// Set on first persist, never changed afterwards
    pub created_at: Option<DateTime<Utc>>,

    /// Refreshed on every persist; always >= created_at
    pub updated_at: Option<DateTime<Utc>>,

    /// True iff the recipe was written through the user-authored save path.
    /// Never user-settable: the store's write paths own this flag.
    pub is_custom: bool,
}

/// An ingredient line. Value type, no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    /// Free-text quantity ("2 cups", "a pinch")
    pub quantity: String,

    pub notes: Option<String>,
}

/// One preparation step within a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    /// 1-based step number; must equal its position + 1 within the recipe
    pub number: u32,

    pub instruction: String,

    /// Optional timer duration for this step, in minutes
    pub duration_minutes: Option<u32>,

    /// References to step photos/videos
    pub media: Vec<String>,

    pub tips: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Recipe classification: meal type, dietary, cuisine, occasion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeCategory {
    // Meal type
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Dessert,
    // Dietary
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    // Cuisine
    Italian,
    Mexican,
    Asian,
    Mediterranean,
    // Occasion
    QuickMeal,
    PartyFood,
    Holiday,
}

impl Recipe {
    /// Create a new, not-yet-persisted Recipe.
    /// Timestamps and identity are assigned by the store's write paths.
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: String::new(),
            name,
            description,
            main_photo: None,
            ingredients: Vec::new(),
            steps: Vec::new(),
            cook_time_minutes: 0,
            servings: 1,
            difficulty: Difficulty::Easy,
            categories: BTreeSet::new(),
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
            is_custom: false,
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Thumbnail reference for listing surfaces (currently the main photo)
    pub fn thumbnail(&self) -> Option<String> {
        self.main_photo.clone()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "EASY"),
            Difficulty::Medium => write!(f, "MEDIUM"),
            Difficulty::Hard => write!(f, "HARD"),
        }
    }
}

impl std::fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecipeCategory::Breakfast => "breakfast",
            RecipeCategory::Lunch => "lunch",
            RecipeCategory::Dinner => "dinner",
            RecipeCategory::Snack => "snack",
            RecipeCategory::Dessert => "dessert",
            RecipeCategory::Vegetarian => "vegetarian",
            RecipeCategory::Vegan => "vegan",
            RecipeCategory::GlutenFree => "gluten_free",
            RecipeCategory::DairyFree => "dairy_free",
            RecipeCategory::Italian => "italian",
            RecipeCategory::Mexican => "mexican",
            RecipeCategory::Asian => "asian",
            RecipeCategory::Mediterranean => "mediterranean",
            RecipeCategory::QuickMeal => "quick_meal",
            RecipeCategory::PartyFood => "party_food",
            RecipeCategory::Holiday => "holiday",
        };
        write!(f, "{}", name)
    }
}

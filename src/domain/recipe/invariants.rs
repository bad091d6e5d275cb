use super::entity::Recipe;
use crate::domain::{DomainError, DomainResult};

/// Validates all Recipe invariants
/// These are the absolute rules that must hold for a Recipe to be valid
pub fn validate_recipe(recipe: &Recipe) -> DomainResult<()> {
    validate_name(&recipe.name)?;
    validate_steps(recipe)?;
    validate_timestamps(recipe)?;
    Ok(())
}

/// Name cannot be empty
fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Recipe name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Step numbers are 1-based, contiguous, and match list position
fn validate_steps(recipe: &Recipe) -> DomainResult<()> {
    for (position, step) in recipe.steps.iter().enumerate() {
        let expected = (position + 1) as u32;
        if step.number != expected {
            return Err(DomainError::InvariantViolation(format!(
                "Step at position {} has number {}, expected {}",
                position, step.number, expected
            )));
        }
    }
    Ok(())
}

/// If both timestamps are present, updated must not precede created
fn validate_timestamps(recipe: &Recipe) -> DomainResult<()> {
    if let (Some(created), Some(updated)) = (recipe.created_at, recipe.updated_at) {
        if updated < created {
            return Err(DomainError::InvariantViolation(format!(
                "Updated timestamp {:?} precedes created timestamp {:?}",
                updated, created
            )));
        }
    }
    Ok(())
}

/// Invariants that must hold true for the Recipe domain:
///
/// 1. Identity (id) is immutable once assigned
/// 2. Name cannot be empty
/// 3. Steps are 1-based and contiguous (number == position + 1)
/// 4. Created timestamp never changes after first persist
/// 5. Updated timestamp reflects last modification, updated >= created
/// 6. is_custom is owned by the store's write paths, never by callers

//! Recipe types shared between the store and the HTTP layer.

use serde::{Deserialize, Serialize};

use super::id::RecipeId;

/// Short recipe card returned when a recipe is added to a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub name: String,
    /// Cooking time in minutes.
    pub cooking_time: i32,
}

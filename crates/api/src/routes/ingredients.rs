//! Ingredient catalogue handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use foodgram_core::{Ingredient, IngredientId};

use crate::db::IngredientRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for the ingredient listing.
#[derive(Debug, Default, Deserialize)]
pub struct IngredientQuery {
    /// Case-insensitive substring of the ingredient name.
    pub name: Option<String>,
}

/// List ingredients, optionally filtered by name.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IngredientQuery>,
) -> Result<Json<Vec<Ingredient>>> {
    let ingredients = IngredientRepository::new(state.pool())
        .list(query.name.as_deref())
        .await?;

    Ok(Json(ingredients))
}

/// Show a single ingredient.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<IngredientId>,
) -> Result<Json<Ingredient>> {
    IngredientRepository::new(state.pool())
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("ingredient {id} not found")))
}

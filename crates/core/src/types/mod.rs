//! Core types for Foodgram.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod ingredient;
pub mod recipe;

pub use id::*;
pub use ingredient::{AggregatedLine, Ingredient, IngredientKey, IngredientKeyError, IngredientLine};
pub use recipe::RecipeSummary;

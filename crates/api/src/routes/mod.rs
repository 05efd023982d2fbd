//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                                - Liveness check
//! GET    /health/ready                          - Database readiness check
//!
//! # Ingredients
//! GET    /api/ingredients/?name=<substr>        - Ingredient catalogue
//! GET    /api/ingredients/{id}/                 - Single ingredient
//!
//! # Shopping cart (requires `Authorization: Token <key>`)
//! POST   /api/recipes/{id}/shopping_cart/       - Add recipe to cart
//! DELETE /api/recipes/{id}/shopping_cart/       - Remove recipe from cart
//! GET    /api/recipes/download_shopping_cart/   - Download shopping list
//! ```

pub mod health;
pub mod ingredients;
pub mod shopping_cart;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the ingredient catalogue routes.
pub fn ingredient_routes() -> Router<AppState> {
    Router::new()
        .route("/api/ingredients/", get(ingredients::index))
        .route("/api/ingredients/{id}/", get(ingredients::show))
}

/// Create the shopping cart routes.
pub fn shopping_cart_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/recipes/download_shopping_cart/",
            get(shopping_cart::download),
        )
        .route(
            "/api/recipes/{id}/shopping_cart/",
            post(shopping_cart::add).delete(shopping_cart::remove),
        )
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(ingredient_routes())
        .merge(shopping_cart_routes())
}

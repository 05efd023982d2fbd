//! Shopping cart handlers.
//!
//! Adding and removing recipes, and downloading the aggregated shopping list
//! as a plain-text attachment.

use axum::{
    Json,
    extract::{Path, State},
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use tracing::{info, instrument};

use foodgram_core::{
    RecipeId, RecipeSummary, SHOPPING_LIST_CONTENT_TYPE, SHOPPING_LIST_FILENAME,
    ShoppingCartReader, ShoppingList, ShoppingListAggregator, UserId,
};

use crate::db::{RepositoryError, ShoppingCartRepository};
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Put a recipe into the current user's cart.
///
/// Responds `201 Created` with the recipe card.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
    Path(recipe_id): Path<RecipeId>,
) -> Result<(StatusCode, Json<RecipeSummary>)> {
    let recipe = ShoppingCartRepository::new(state.pool())
        .add(user_id, recipe_id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("recipe {recipe_id} not found")),
            RepositoryError::Conflict(msg) => AppError::BadRequest(msg),
            other => AppError::Database(other),
        })?;

    info!(%user_id, %recipe_id, "recipe added to shopping cart");
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Take a recipe out of the current user's cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
    Path(recipe_id): Path<RecipeId>,
) -> Result<StatusCode> {
    ShoppingCartRepository::new(state.pool())
        .remove(user_id, recipe_id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => {
                AppError::NotFound(format!("recipe {recipe_id} is not in the shopping cart"))
            }
            other => AppError::Database(other),
        })?;

    info!(%user_id, %recipe_id, "recipe removed from shopping cart");
    Ok(StatusCode::NO_CONTENT)
}

/// Download the current user's shopping list.
///
/// The list is computed fresh from the cart on every request.
#[instrument(skip(state))]
pub async fn download(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
) -> Result<Response> {
    shopping_list_response(ShoppingCartRepository::new(state.pool()), user_id).await
}

/// Aggregate `user_id`'s cart from `reader` into the downloadable attachment.
///
/// # Errors
///
/// Returns `AppError::Database` if the cart cannot be read.
pub async fn shopping_list_response<R>(reader: R, user_id: UserId) -> Result<Response>
where
    R: ShoppingCartReader<Error = RepositoryError>,
{
    let list = ShoppingListAggregator::new(reader)
        .aggregate(user_id)
        .await?;

    info!(%user_id, ingredients = list.len(), "shopping list generated");
    Ok(shopping_list_attachment(&list))
}

/// Wrap a rendered shopping list as a downloadable text attachment.
///
/// The body is exactly [`ShoppingList::render`], with nothing added.
#[must_use]
pub fn shopping_list_attachment(list: &ShoppingList) -> Response {
    (
        [
            (CONTENT_TYPE, SHOPPING_LIST_CONTENT_TYPE.to_owned()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{SHOPPING_LIST_FILENAME}\""),
            ),
        ],
        list.render(),
    )
        .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use foodgram_core::{CartSnapshot, IngredientKey, IngredientLine};

    use super::*;

    /// Reader serving a fixed cart, or failing like an unreachable database.
    struct FixedCart(Option<CartSnapshot>);

    impl ShoppingCartReader for FixedCart {
        type Error = RepositoryError;

        async fn read_cart(
            &self,
            _user_id: UserId,
        ) -> std::result::Result<CartSnapshot, RepositoryError> {
            self.0
                .clone()
                .ok_or(RepositoryError::Database(sqlx::Error::PoolTimedOut))
        }
    }

    fn line(recipe: i32, name: &str, unit: &str, amount: u32) -> IngredientLine {
        IngredientLine {
            recipe_id: RecipeId::new(recipe),
            ingredient: IngredientKey::new(name, unit).unwrap(),
            amount,
        }
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_download_serves_aggregated_cart() {
        let snapshot = CartSnapshot {
            recipe_ids: vec![RecipeId::new(1), RecipeId::new(2)],
            lines: vec![
                line(1, "Sugar", "g", 100),
                line(1, "Flour", "g", 200),
                line(2, "Sugar", "g", 50),
            ],
        };

        let response = shopping_list_response(FixedCart(Some(snapshot)), UserId::new(1))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            response.headers()[CONTENT_DISPOSITION],
            "attachment; filename=\"shopping_list.txt\""
        );
        assert_eq!(
            body_text(response).await,
            "Список покупок: \n Flour (g) — 200\n Sugar (g) — 150"
        );
    }

    #[tokio::test]
    async fn test_download_reports_unreadable_cart_as_server_error() {
        let err = shopping_list_response(FixedCart(None), UserId::new(1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Database(RepositoryError::Database(_))
        ));

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value =
            serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body, serde_json::json!({ "detail": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_attachment_headers() {
        let response = shopping_list_attachment(&ShoppingList::default());

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            response.headers()[CONTENT_DISPOSITION],
            "attachment; filename=\"shopping_list.txt\""
        );
    }

    #[tokio::test]
    async fn test_attachment_body_is_rendered_list() {
        let list = ShoppingList::from_lines(&[
            line(1, "Sugar", "g", 100),
            line(1, "Flour", "g", 200),
            line(2, "Sugar", "g", 50),
        ]);

        let body = body_text(shopping_list_attachment(&list)).await;

        assert_eq!(body, "Список покупок: \n Flour (g) — 200\n Sugar (g) — 150");
    }

    #[tokio::test]
    async fn test_attachment_for_empty_cart_is_header_only() {
        let body = body_text(shopping_list_attachment(&ShoppingList::default())).await;
        assert_eq!(body, "Список покупок: ");
    }
}

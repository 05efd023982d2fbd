//! Print a user's shopping list.
//!
//! Uses the same aggregation as `GET /api/recipes/download_shopping_cart/`,
//! so the output is byte-for-byte the downloadable document.

use foodgram_api::db::ShoppingCartRepository;
use foodgram_core::{ShoppingListAggregator, UserId};

/// Render and print the shopping list for `user_id`.
///
/// # Errors
///
/// Returns an error if the database cannot be read.
pub async fn print(user_id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;
    let user_id = UserId::new(user_id);

    let list = ShoppingListAggregator::new(ShoppingCartRepository::new(&pool))
        .aggregate(user_id)
        .await?;

    tracing::info!(%user_id, ingredients = list.len(), "Shopping list generated");

    #[allow(clippy::print_stdout)]
    {
        println!("{list}");
    }

    Ok(())
}

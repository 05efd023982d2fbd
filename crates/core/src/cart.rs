//! Shopping cart port and the shopping-list aggregator.
//!
//! The aggregator is storage-agnostic: it asks a [`ShoppingCartReader`] for a
//! consistent snapshot of the user's cart and turns it into a
//! [`ShoppingList`]. Reader failures are returned unchanged and never retried.

use tracing::debug;

use crate::shopping_list::ShoppingList;
use crate::types::{IngredientLine, RecipeId, UserId};

/// A consistent read of one user's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSnapshot {
    /// Recipes currently in the cart.
    pub recipe_ids: Vec<RecipeId>,
    /// Ingredient lines of every recipe in `recipe_ids`.
    pub lines: Vec<IngredientLine>,
}

impl CartSnapshot {
    /// Whether the cart holds no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipe_ids.is_empty()
    }
}

/// Read access to shopping carts.
///
/// Implementations must read the cart entries and the ingredient lines in a
/// single logical read (at least read-committed) so the two agree with each
/// other.
pub trait ShoppingCartReader: Send + Sync {
    /// Error returned when the store cannot be read.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the recipes in `user_id`'s cart together with their ingredient lines.
    fn read_cart(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<CartSnapshot, Self::Error>> + Send;
}

impl<R: ShoppingCartReader> ShoppingCartReader for &R {
    type Error = R::Error;

    fn read_cart(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<CartSnapshot, Self::Error>> + Send {
        (**self).read_cart(user_id)
    }
}

/// Builds a user's shopping list from their cart.
///
/// Stateless apart from the reader it wraps; concurrent calls for the same or
/// different users do not interact.
#[derive(Debug, Clone)]
pub struct ShoppingListAggregator<R> {
    reader: R,
}

impl<R: ShoppingCartReader> ShoppingListAggregator<R> {
    /// Create an aggregator over `reader`.
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Compute the shopping list for `user_id`.
    ///
    /// The user is assumed to exist. An empty cart yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns the reader's error unchanged if the store cannot be read.
    pub async fn aggregate(&self, user_id: UserId) -> Result<ShoppingList, R::Error> {
        let snapshot = self.reader.read_cart(user_id).await?;

        if snapshot.is_empty() {
            debug!(%user_id, "shopping cart is empty");
            return Ok(ShoppingList::default());
        }

        let list = ShoppingList::from_lines(&snapshot.lines);

        debug!(
            %user_id,
            recipes = snapshot.recipe_ids.len(),
            lines = snapshot.lines.len(),
            ingredients = list.len(),
            "aggregated shopping list"
        );

        Ok(list)
    }
}

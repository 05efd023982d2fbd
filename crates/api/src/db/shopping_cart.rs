//! Shopping cart repository.
//!
//! Cart mutations (add/remove a recipe) and the consistent cart read used to
//! build shopping lists.

use sqlx::PgPool;

use foodgram_core::{
    CartSnapshot, IngredientKey, IngredientLine, RecipeId, RecipeSummary, ShoppingCartReader,
    UserId,
};

use super::{RepositoryError, conflict_on_unique};

/// Repository for shopping cart database operations.
pub struct ShoppingCartRepository<'a> {
    pool: &'a PgPool,
}

#[derive(sqlx::FromRow)]
struct RecipeRow {
    id: i32,
    name: String,
    cooking_time: i32,
}

#[derive(sqlx::FromRow)]
struct IngredientLineRow {
    recipe_id: i32,
    name: String,
    measurement_unit: String,
    amount: i32,
}

impl<'a> ShoppingCartRepository<'a> {
    /// Create a new shopping cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Put a recipe into a user's cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the recipe doesn't exist.
    /// Returns `RepositoryError::Conflict` if the recipe is already in the cart.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn add(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> Result<RecipeSummary, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let recipe = sqlx::query_as::<_, RecipeRow>(
            r"
            SELECT id, name, cooking_time
            FROM recipe
            WHERE id = $1
            ",
        )
        .bind(recipe_id.as_i32())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        sqlx::query(
            r"
            INSERT INTO shopping_cart (user_id, recipe_id)
            VALUES ($1, $2)
            ",
        )
        .bind(user_id.as_i32())
        .bind(recipe_id.as_i32())
        .execute(&mut *tx)
        .await
        .map_err(|e| conflict_on_unique(e, "recipe is already in the shopping cart"))?;

        tx.commit().await?;

        Ok(RecipeSummary {
            id: RecipeId::new(recipe.id),
            name: recipe.name,
            cooking_time: recipe.cooking_time,
        })
    }

    /// Take a recipe out of a user's cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the recipe is not in the cart.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn remove(&self, user_id: UserId, recipe_id: RecipeId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM shopping_cart
            WHERE user_id = $1 AND recipe_id = $2
            ",
        )
        .bind(user_id.as_i32())
        .bind(recipe_id.as_i32())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

impl ShoppingCartReader for ShoppingCartRepository<'_> {
    type Error = RepositoryError;

    /// Read the cart and its ingredient lines in one read-only transaction.
    async fn read_cart(&self, user_id: UserId) -> Result<CartSnapshot, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let recipe_ids: Vec<i32> = sqlx::query_scalar(
            r"
            SELECT recipe_id
            FROM shopping_cart
            WHERE user_id = $1
            ORDER BY recipe_id
            ",
        )
        .bind(user_id.as_i32())
        .fetch_all(&mut *tx)
        .await?;

        if recipe_ids.is_empty() {
            tx.commit().await?;
            return Ok(CartSnapshot::default());
        }

        let rows = sqlx::query_as::<_, IngredientLineRow>(
            r"
            SELECT ri.recipe_id, i.name, i.measurement_unit, ri.amount
            FROM recipe_ingredient ri
            JOIN ingredient i ON i.id = ri.ingredient_id
            WHERE ri.recipe_id = ANY($1)
            ",
        )
        .bind(recipe_ids.as_slice())
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let lines = rows
            .into_iter()
            .map(line_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CartSnapshot {
            recipe_ids: recipe_ids.into_iter().map(RecipeId::new).collect(),
            lines,
        })
    }
}

/// Convert a database row into a domain ingredient line.
fn line_from_row(row: IngredientLineRow) -> Result<IngredientLine, RepositoryError> {
    let amount = u32::try_from(row.amount)
        .ok()
        .filter(|amount| *amount >= 1)
        .ok_or_else(|| {
            RepositoryError::DataCorruption(format!(
                "recipe {} has non-positive amount {} for {}",
                row.recipe_id, row.amount, row.name
            ))
        })?;

    let ingredient = IngredientKey::new(row.name, row.measurement_unit).map_err(|e| {
        RepositoryError::DataCorruption(format!("invalid ingredient in database: {e}"))
    })?;

    Ok(IngredientLine {
        recipe_id: RecipeId::new(row.recipe_id),
        ingredient,
        amount,
    })
}

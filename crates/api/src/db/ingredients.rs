//! Ingredient catalogue repository.

use sqlx::PgPool;

use foodgram_core::{Ingredient, IngredientId, IngredientKey};

use super::RepositoryError;

/// Repository for ingredient catalogue operations.
pub struct IngredientRepository<'a> {
    pool: &'a PgPool,
}

#[derive(sqlx::FromRow)]
struct IngredientRow {
    id: i32,
    name: String,
    measurement_unit: String,
}

impl From<IngredientRow> for Ingredient {
    fn from(row: IngredientRow) -> Self {
        Self {
            id: IngredientId::new(row.id),
            name: row.name,
            measurement_unit: row.measurement_unit,
        }
    }
}

impl<'a> IngredientRepository<'a> {
    /// Create a new ingredient repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List ingredients ordered by name, optionally filtered by a
    /// case-insensitive substring of the name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, name_filter: Option<&str>) -> Result<Vec<Ingredient>, RepositoryError> {
        let pattern = name_filter
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(like_pattern);

        let rows = sqlx::query_as::<_, IngredientRow>(
            r"
            SELECT id, name, measurement_unit
            FROM ingredient
            WHERE $1::text IS NULL OR name ILIKE $1
            ORDER BY name, measurement_unit
            ",
        )
        .bind(pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Ingredient::from).collect())
    }

    /// Get an ingredient by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: IngredientId) -> Result<Option<Ingredient>, RepositoryError> {
        let row = sqlx::query_as::<_, IngredientRow>(
            r"
            SELECT id, name, measurement_unit
            FROM ingredient
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Ingredient::from))
    }

    /// Insert ingredients that are not in the catalogue yet.
    ///
    /// Existing `(name, measurement_unit)` pairs are left untouched, so
    /// loading the same fixture twice is harmless. Runs in one transaction.
    ///
    /// # Returns
    ///
    /// The number of ingredients actually inserted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails.
    pub async fn insert_many(&self, keys: &[IngredientKey]) -> Result<u64, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for key in keys {
            let result = sqlx::query(
                r"
                INSERT INTO ingredient (name, measurement_unit)
                VALUES ($1, $2)
                ON CONFLICT (name, measurement_unit) DO NOTHING
                ",
            )
            .bind(&key.name)
            .bind(&key.measurement_unit)
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;

        Ok(inserted)
    }
}

/// Build an `ILIKE` pattern matching `needle` anywhere, escaping wildcards.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

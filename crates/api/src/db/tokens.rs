//! API token lookups.
//!
//! Tokens are issued by the authentication service; this repository only
//! resolves them to users.

use sqlx::PgPool;

use foodgram_core::UserId;

use super::RepositoryError;

/// Repository for resolving API tokens.
pub struct TokenRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TokenRepository<'a> {
    /// Create a new token repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find the user a token belongs to.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn user_for_token(&self, key: &str) -> Result<Option<UserId>, RepositoryError> {
        let user_id: Option<i32> = sqlx::query_scalar(
            r"
            SELECT user_id
            FROM auth_token
            WHERE key = $1
            ",
        )
        .bind(key)
        .fetch_optional(self.pool)
        .await?;

        Ok(user_id.map(UserId::new))
    }
}

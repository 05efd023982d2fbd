//! Token authentication extractor.
//!
//! Requests authenticate with an `Authorization: Token <key>` header. Keys are
//! issued by the authentication service and resolved here through the
//! `auth_token` table.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

use foodgram_core::UserId;

use crate::db::TokenRepository;
use crate::error::{AppError, set_sentry_user};
use crate::state::AppState;

/// Authorization scheme expected in front of the key.
const TOKEN_SCHEME: &str = "Token";

/// Extractor that requires an authenticated user.
///
/// Rejects with `401 Unauthorized` if the header is missing, malformed, or
/// names an unknown token.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireAuth(user_id): RequireAuth) -> String {
///     format!("Hello, user {user_id}!")
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAuth(pub UserId);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let key = token_from_headers(&parts.headers).ok_or_else(|| {
            AppError::Unauthorized("Authentication credentials were not provided.".to_string())
        })?;

        let user_id = TokenRepository::new(state.pool())
            .user_for_token(key)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid token.".to_string()))?;

        set_sentry_user(&user_id);
        tracing::Span::current().record("user_id", user_id.as_i32());

        Ok(Self(user_id))
    }
}

/// Pull the token key out of an `Authorization: Token <key>` header.
fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, key) = value.trim().split_once(' ')?;
    let key = key.trim();

    if scheme.eq_ignore_ascii_case(TOKEN_SCHEME) && !key.is_empty() && !key.contains(' ') {
        Some(key)
    } else {
        None
    }
}

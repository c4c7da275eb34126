//! Resolves the calling wardrobe owner from the `Authorization` header.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use fittim_core::error::CoreError;
use fittim_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The owner every wardrobe, fit and profile operation is scoped to.
///
/// Tokens are issued by the external auth service; only validation happens
/// here. Any failure is a 401 and the user id never comes from elsewhere.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
}

/// Pull the token out of `Authorization: Bearer <token>`. The scheme is
/// matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Result<&str, CoreError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| CoreError::Unauthorized("Missing Authorization header".into()))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(CoreError::Unauthorized(
            "Expected an Authorization header of the form: Bearer <token>".into(),
        )),
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, path = %parts.uri.path(), "Rejected bearer token");
            CoreError::Unauthorized("Invalid or expired token".into())
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

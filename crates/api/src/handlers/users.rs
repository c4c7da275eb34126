//! Handlers for the caller's own profile.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use fittim_core::error::CoreError;
use fittim_core::profile::validate_measurement;
use fittim_core::types::DbId;
use fittim_db::models::user::{PatchUserProfile, ReplaceUserProfile};
use fittim_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn user_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "User", id })
}

fn validate_body(height: Option<f64>, weight: Option<f64>) -> Result<(), CoreError> {
    validate_measurement("height", height)?;
    validate_measurement("weight", weight)
}

/// GET /api/v1/users/me
pub async fn get_me(auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;

    Ok(Json(DataResponse { data: user }))
}

/// PUT /api/v1/users/me
///
/// Full replace: omitted fields are cleared.
pub async fn replace_me(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ReplaceUserProfile>,
) -> AppResult<impl IntoResponse> {
    validate_body(input.height, input.weight)?;

    let user = UserRepo::replace_profile(&state.pool, auth.user_id, &input)
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;

    tracing::info!(user_id = auth.user_id, "Profile replaced");

    Ok(Json(DataResponse { data: user }))
}

/// PATCH /api/v1/users/me
///
/// Partial merge: omitted fields are left unchanged.
pub async fn patch_me(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<PatchUserProfile>,
) -> AppResult<impl IntoResponse> {
    validate_body(input.height, input.weight)?;

    let user = UserRepo::patch_profile(&state.pool, auth.user_id, &input)
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;

    tracing::info!(user_id = auth.user_id, "Profile patched");

    Ok(Json(DataResponse { data: user }))
}

//! Handlers for the caller's wardrobe.
//!
//! Items are always scoped to the authenticated user; another user's item is
//! indistinguishable from a missing one.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fittim_core::error::CoreError;
use fittim_core::recommendation::RECENT_ITEMS_LIMIT;
use fittim_core::types::DbId;
use fittim_core::wardrobe::{parse_category_filter, parse_season_filter};
use fittim_db::models::wardrobe_item::{
    CreateWardrobeItem, PatchWardrobeItem, ReplaceWardrobeItem,
};
use fittim_db::repositories::WardrobeItemRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::WardrobeFilterParams;
use crate::response::{created, DataResponse};
use crate::state::AppState;

fn item_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "WardrobeItem",
        id,
    })
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// GET /api/v1/wardrobe?category=&season=
///
/// List the caller's items, newest first. Both filters are optional; `ALL`
/// means no filter and unknown values are rejected. A season filter matches
/// items tagged with exactly that season.
pub async fn list_items(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<WardrobeFilterParams>,
) -> AppResult<impl IntoResponse> {
    let category = parse_category_filter(params.category.as_deref())?;
    let season = parse_season_filter(params.season.as_deref())?;

    let items = WardrobeItemRepo::list_filtered(&state.pool, auth.user_id, category, season).await?;

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/wardrobe/recent
pub async fn list_recent(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = WardrobeItemRepo::list_recent(&state.pool, auth.user_id, RECENT_ITEMS_LIMIT).await?;

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/wardrobe/{id}
pub async fn get_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = WardrobeItemRepo::find_for_user(&state.pool, auth.user_id, item_id)
        .await?
        .ok_or_else(|| item_not_found(item_id))?;

    Ok(Json(DataResponse { data: item }))
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// POST /api/v1/wardrobe
///
/// Register a new item. The image is uploaded elsewhere; only its URL is
/// recorded.
pub async fn create_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWardrobeItem>,
) -> AppResult<impl IntoResponse> {
    let item = WardrobeItemRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        item_id = item.id,
        user_id = auth.user_id,
        category = %input.category,
        season = %input.season,
        "Wardrobe item created",
    );

    Ok(created(item))
}

/// PUT /api/v1/wardrobe/{id}
///
/// Full replace: omitted optional fields are cleared.
pub async fn replace_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<ReplaceWardrobeItem>,
) -> AppResult<impl IntoResponse> {
    let item = WardrobeItemRepo::replace(&state.pool, auth.user_id, item_id, &input)
        .await?
        .ok_or_else(|| item_not_found(item_id))?;

    tracing::info!(item_id, user_id = auth.user_id, "Wardrobe item replaced");

    Ok(Json(DataResponse { data: item }))
}

/// PATCH /api/v1/wardrobe/{id}
///
/// Partial merge: omitted fields are left unchanged.
pub async fn patch_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<PatchWardrobeItem>,
) -> AppResult<impl IntoResponse> {
    let item = WardrobeItemRepo::patch(&state.pool, auth.user_id, item_id, &input)
        .await?
        .ok_or_else(|| item_not_found(item_id))?;

    tracing::info!(item_id, user_id = auth.user_id, "Wardrobe item patched");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/wardrobe/{id}
///
/// Items still referenced by fit history cannot be deleted (409).
pub async fn delete_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = WardrobeItemRepo::delete(&state.pool, auth.user_id, item_id).await?;

    if !deleted {
        return Err(item_not_found(item_id));
    }

    tracing::info!(item_id, user_id = auth.user_id, "Wardrobe item deleted");

    Ok(StatusCode::NO_CONTENT)
}

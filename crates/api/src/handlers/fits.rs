//! Handlers for outfit recommendations and fit history.
//!
//! All endpoints require authentication via [`AuthUser`] and only ever touch
//! the caller's own wardrobe and history.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use fittim_core::error::CoreError;
use fittim_core::types::DbId;
use fittim_db::models::fit_history::FitHistoryDetail;
use fittim_db::models::wardrobe_item::WardrobeItem;
use fittim_db::repositories::{FitHistoryRepo, WardrobeItemRepo};
use fittim_db::DbPool;
use fittim_pipeline::RecommendRequest;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/fits/recommend
///
/// Recommend an outfit for the given situation and record it in the
/// caller's history. AI failures are absorbed by the random fallback; the
/// `source` field of the response says which path produced the outfit.
pub async fn recommend(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<RecommendRequest>,
) -> AppResult<impl IntoResponse> {
    let selection = state.recommender.recommend(auth.user_id, &input).await?;

    Ok(Json(DataResponse { data: selection }))
}

/// GET /api/v1/fits/history?limit=
///
/// The caller's most recent recommendations, newest first.
pub async fn list_history(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let summaries = state
        .recommender
        .history_summaries(auth.user_id, params.limit)
        .await?;

    Ok(Json(DataResponse { data: summaries }))
}

/// GET /api/v1/fits/history/{id}
///
/// One of the caller's history entries with its items resolved. Entries of
/// other users are reported as not found.
pub async fn get_history(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(history_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let history = FitHistoryRepo::find_for_user(&state.pool, auth.user_id, history_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FitHistory",
            id: history_id,
        }))?;

    let top = referenced_item(&state.pool, auth.user_id, history.top_id).await?;
    let bottom = referenced_item(&state.pool, auth.user_id, history.bottom_id).await?;
    let outer = match history.outer_id {
        Some(outer_id) => Some(referenced_item(&state.pool, auth.user_id, outer_id).await?),
        None => None,
    };

    Ok(Json(DataResponse {
        data: FitHistoryDetail::new(history, top, bottom, outer),
    }))
}

/// Load an item a history row points at. History references are protected
/// by foreign keys, so a miss is an internal inconsistency.
async fn referenced_item(pool: &DbPool, user_id: DbId, item_id: DbId) -> AppResult<WardrobeItem> {
    WardrobeItemRepo::find_for_user(pool, user_id, item_id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("History references missing wardrobe item {item_id}"))
        })
}

//! Route definitions for recommendations and fit history.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::fits;
use crate::state::AppState;

/// Routes mounted at `/fits`.
///
/// ```text
/// POST   /recommend          -> recommend
/// GET    /history            -> list_history
/// GET    /history/{id}       -> get_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recommend", post(fits::recommend))
        .route("/history", get(fits::list_history))
        .route("/history/{id}", get(fits::get_history))
}

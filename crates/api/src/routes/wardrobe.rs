//! Route definitions for wardrobe items.

use axum::routing::get;
use axum::Router;

use crate::handlers::wardrobe;
use crate::state::AppState;

/// Routes mounted at `/wardrobe`.
///
/// ```text
/// GET    /                   -> list_items
/// POST   /                   -> create_item
/// GET    /recent             -> list_recent
/// GET    /{id}               -> get_item
/// PUT    /{id}               -> replace_item
/// PATCH  /{id}               -> patch_item
/// DELETE /{id}               -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(wardrobe::list_items).post(wardrobe::create_item))
        .route("/recent", get(wardrobe::list_recent))
        .route(
            "/{id}",
            get(wardrobe::get_item)
                .put(wardrobe::replace_item)
                .patch(wardrobe::patch_item)
                .delete(wardrobe::delete_item),
        )
}

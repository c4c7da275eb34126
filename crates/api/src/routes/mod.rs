pub mod fits;
pub mod health;
pub mod users;
pub mod wardrobe;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /fits/recommend                  recommend (POST)
/// /fits/history                    history summaries, newest first
/// /fits/history/{id}               history detail
///
/// /wardrobe                        list (?category=&season=), create
/// /wardrobe/recent                 five most recent items
/// /wardrobe/{id}                   get, replace (PUT), patch, delete
///
/// /users/me                        profile: get, replace (PUT), patch
/// ```
///
/// Every route requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/fits", fits::router())
        .nest("/wardrobe", wardrobe::router())
        .nest("/users", users::router())
}

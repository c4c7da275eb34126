//! Liveness and dependency report at `GET /health`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthReport {
    /// `"ok"` when Postgres answers, `"degraded"` otherwise. The service keeps
    /// running either way.
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    pub advisor: AdvisorReport,
}

/// Static view of the AI advisor setup. No call to Gemini is made.
#[derive(Serialize)]
pub struct AdvisorReport {
    pub model: String,
    /// Without a key every recommendation comes from the random fallback.
    pub key_configured: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let database_up = fittim_db::health_check(&state.pool).await.is_ok();
    if !database_up {
        tracing::warn!("Health check could not reach the database");
    }

    let gemini = &state.config.gemini;
    Json(HealthReport {
        status: if database_up { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if database_up { "up" } else { "down" },
        advisor: AdvisorReport {
            model: gemini.model.clone(),
            key_configured: !gemini.api_key.is_empty(),
        },
    })
}

/// Mounted at the root, outside `/api/v1` and without authentication.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

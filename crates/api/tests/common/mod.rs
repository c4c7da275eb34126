#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use fittim_api::auth::jwt::{generate_access_token, JwtConfig};
use fittim_api::config::{GeminiConfig, ServerConfig};
use fittim_api::router::build_app_router;
use fittim_api::state::AppState;
use fittim_core::types::DbId;
use fittim_db::models::user::CreateUser;
use fittim_db::repositories::UserRepo;
use fittim_gemini::{CandidateItem, GeminiError, PromptContext, RecommendationResult};
use fittim_pipeline::{OutfitAdvisor, Recommender};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults. No env vars are read.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
        gemini: GeminiConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            model: "test-model".to_string(),
            api_key: String::new(),
            timeout_secs: 1,
        },
    }
}

// ---------------------------------------------------------------------------
// Advisors
// ---------------------------------------------------------------------------

/// Advisor that is always down, forcing the random fallback.
pub struct UnavailableAdvisor;

#[async_trait]
impl OutfitAdvisor for UnavailableAdvisor {
    async fn propose(
        &self,
        _candidates: &[CandidateItem],
        _context: &PromptContext<'_>,
    ) -> Result<RecommendationResult, GeminiError> {
        Err(GeminiError::ApiError {
            status: 503,
            body: "unavailable".to_string(),
        })
    }
}

/// Advisor that picks the first TOP and BOTTOM it is shown.
pub struct FirstPickAdvisor;

#[async_trait]
impl OutfitAdvisor for FirstPickAdvisor {
    async fn propose(
        &self,
        candidates: &[CandidateItem],
        _context: &PromptContext<'_>,
    ) -> Result<RecommendationResult, GeminiError> {
        let first = |name: &str| {
            candidates
                .iter()
                .find(|c| c.category.name() == name)
                .map(|c| c.id)
        };
        Ok(RecommendationResult {
            top_id: first("TOP"),
            bottom_id: first("BOTTOM"),
            outer_id: None,
            shoes_id: None,
            reason: Some("Clean and simple".to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Build the full application router with the AI path unavailable.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_advisor(pool, Arc::new(UnavailableAdvisor))
}

/// Build the full application router with the given advisor, using the
/// same middleware stack as production.
pub fn build_test_app_with_advisor(pool: PgPool, advisor: Arc<dyn OutfitAdvisor>) -> Router {
    let config = test_config();
    let recommender = Recommender::with_postgres(pool.clone(), advisor, Duration::from_secs(1));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        recommender: Arc::new(recommender),
    };

    build_app_router(state, &config)
}

/// Insert a user and return its id and a valid bearer token.
pub async fn seed_user(pool: &PgPool, email: &str) -> (DbId, String) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            nickname: "tester".to_string(),
        },
    )
    .await
    .expect("user insert should succeed");
    let token = generate_access_token(user.id, &test_config().jwt).expect("token should encode");
    (user.id, token)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a wardrobe item through the API and return its id.
pub async fn create_item(pool: &PgPool, token: &str, category: &str, season: &str) -> DbId {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/wardrobe",
        token,
        serde_json::json!({
            "category": category,
            "season": season,
            "image_url": format!("https://img.example.com/{category}-{season}.jpg"),
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

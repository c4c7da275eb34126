//! End-to-end tests of the Gemini client against a local stand-in server.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::http::{StatusCode, Uri};
use axum::Router;
use fittim_core::wardrobe::{Category, Season};
use fittim_gemini::{
    CandidateItem, GeminiApi, GeminiError, PromptContext, RecommendationClient,
    RecommendationResult,
};

/// Serve every request with `status` and `body`, recording the request URIs.
async fn serve(status: StatusCode, body: &'static str) -> (SocketAddr, Arc<Mutex<Vec<Uri>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();
    let app = Router::new().fallback(move |uri: Uri| {
        let recorder = recorder.clone();
        async move {
            recorder.lock().unwrap().push(uri);
            (status, body)
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    (addr, seen)
}

fn client_for(addr: SocketAddr) -> RecommendationClient {
    RecommendationClient::new(GeminiApi::new(
        reqwest::Client::new(),
        format!("http://{addr}/v1beta/"),
        "gemini-2.5-flash".to_string(),
        "test-key".to_string(),
    ))
}

fn candidates() -> Vec<CandidateItem> {
    vec![
        CandidateItem {
            id: 11,
            category: Category::Top,
            season: Season::Fall,
        },
        CandidateItem {
            id: 12,
            category: Category::Bottom,
            season: Season::All,
        },
    ]
}

fn context() -> PromptContext<'static> {
    PromptContext {
        place: "Office",
        mood: "Focused",
        season: Season::Fall,
        weather: "Cloudy, 15°C",
    }
}

#[tokio::test]
async fn non_success_status_carries_status_and_body() {
    let (addr, _) = serve(StatusCode::SERVICE_UNAVAILABLE, "model overloaded").await;

    let err = client_for(addr)
        .propose(&candidates(), &context())
        .await
        .unwrap_err();

    assert_matches!(
        err,
        GeminiError::ApiError { status: 503, ref body } if body == "model overloaded"
    );
}

#[tokio::test]
async fn fenced_answer_is_parsed() {
    let (addr, seen) = serve(
        StatusCode::OK,
        r#"{"candidates":[{"content":{"parts":[{"text":"```json\n{\"topId\":11,\"bottomId\":12,\"outerId\":null,\"reason\":\"Sharp but relaxed\"}\n```"}]}}]}"#,
    )
    .await;

    let result = client_for(addr)
        .propose(&candidates(), &context())
        .await
        .unwrap();

    assert_eq!(
        result,
        RecommendationResult {
            top_id: Some(11),
            bottom_id: Some(12),
            outer_id: None,
            shoes_id: None,
            reason: Some("Sharp but relaxed".to_string()),
        }
    );

    let uris = seen.lock().unwrap();
    assert_eq!(uris.len(), 1);
    assert_eq!(uris[0].path(), "/v1beta/models/gemini-2.5-flash:generateContent");
    assert_eq!(uris[0].query(), Some("key=test-key"));
}

#[tokio::test]
async fn empty_candidate_list_is_empty_response() {
    let (addr, _) = serve(StatusCode::OK, r#"{"candidates":[]}"#).await;

    let err = client_for(addr)
        .propose(&candidates(), &context())
        .await
        .unwrap_err();

    assert_matches!(err, GeminiError::EmptyResponse);
}

#[tokio::test]
async fn prose_answer_is_a_parse_error() {
    let (addr, _) = serve(
        StatusCode::OK,
        r#"{"candidates":[{"content":{"parts":[{"text":"I would pick the grey blazer."}]}}]}"#,
    )
    .await;

    let err = client_for(addr)
        .propose(&candidates(), &context())
        .await
        .unwrap_err();

    assert_matches!(err, GeminiError::Parse(_));
}

#[tokio::test]
async fn each_call_makes_exactly_one_request() {
    let (addr, seen) = serve(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;

    let _ = client_for(addr).propose(&candidates(), &context()).await;

    assert_eq!(seen.lock().unwrap().len(), 1);
}

//! REST client for the Gemini `generateContent` endpoint.
//!
//! Wraps a single-turn text generation call using [`reqwest`]. The request
//! timeout is a property of the supplied [`reqwest::Client`].

use serde::{Deserialize, Serialize};

/// HTTP client for one Gemini model.
#[derive(Clone)]
pub struct GeminiApi {
    client: reqwest::Client,
    api_url: String,
    model: String,
    api_key: String,
}

/// Errors from the Gemini layer. Every variant is recoverable by the caller.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response carried no candidate text.
    #[error("Empty response from Gemini")]
    EmptyResponse,

    /// The candidate text was not the expected JSON object.
    #[error("Failed to parse Gemini response: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Subset of the `generateContent` response we read.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if non-blank.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

impl GeminiApi {
    /// Create a client for `model` served under `api_url`.
    ///
    /// * `api_url` - Base URL, e.g. `https://generativelanguage.googleapis.com/v1beta`.
    /// * `model` - Model name, e.g. `gemini-2.5-flash`.
    pub fn new(client: reqwest::Client, api_url: String, model: String, api_key: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        }
    }

    /// Model this client talks to.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }

    /// Send a single-turn prompt and return the first candidate's text.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.model, "Calling Gemini generateContent");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let parsed = response.json::<GenerateContentResponse>().await?;

        parsed
            .first_text()
            .map(str::to_string)
            .ok_or(GeminiError::EmptyResponse)
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`GeminiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GeminiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeminiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Parsing of the model's free-text answer into a structured pick.

use fittim_core::types::DbId;
use serde::Deserialize;

use crate::api::GeminiError;

/// Outfit pick proposed by the model. Ids are untrusted until resolved
/// against the user's wardrobe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub top_id: Option<DbId>,
    pub bottom_id: Option<DbId>,
    pub outer_id: Option<DbId>,
    /// Accepted on the wire but not part of the outfit model.
    pub shoes_id: Option<DbId>,
    pub reason: Option<String>,
}

/// Remove a surrounding Markdown code fence (```` ```json ```` or
/// ```` ``` ````) and trim.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        // Drop an optional language tag on the opening fence line.
        text = rest
            .strip_prefix("json")
            .or_else(|| rest.strip_prefix("JSON"))
            .unwrap_or(rest);
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Parse the model's answer into a [`RecommendationResult`].
///
/// Tolerates surrounding code fences. Anything that is not a JSON object of
/// the expected shape is a [`GeminiError::Parse`].
pub fn parse_recommendation(raw: &str) -> Result<RecommendationResult, GeminiError> {
    let text = strip_code_fences(raw);
    if text.is_empty() {
        return Err(GeminiError::EmptyResponse);
    }
    Ok(serde_json::from_str::<RecommendationResult>(text)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Recommendation client: prompt, call, parse.

use crate::api::{GeminiApi, GeminiError};
use crate::prompt::{build_prompt, CandidateItem, PromptContext};
use crate::response::{parse_recommendation, RecommendationResult};

/// Asks Gemini for an outfit pick. Makes exactly one attempt per call.
#[derive(Clone)]
pub struct RecommendationClient {
    api: GeminiApi,
}

impl RecommendationClient {
    pub fn new(api: GeminiApi) -> Self {
        Self { api }
    }

    /// Propose an outfit from `candidates` for the given situation.
    ///
    /// Any failure (transport, non-2xx, empty or malformed answer) is
    /// returned as a [`GeminiError`]; no retry is attempted.
    pub async fn propose(
        &self,
        candidates: &[CandidateItem],
        context: &PromptContext<'_>,
    ) -> Result<RecommendationResult, GeminiError> {
        let prompt = build_prompt(candidates, context)?;
        let text = self.api.generate_text(&prompt).await?;

        parse_recommendation(&text).inspect_err(|e| {
            tracing::warn!(
                model = %self.api.model(),
                error = %e,
                raw = %text,
                "Unparseable Gemini recommendation",
            );
        })
    }
}

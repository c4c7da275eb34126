//! The AI capability consulted for context-aware picks.

use async_trait::async_trait;
use fittim_gemini::{
    CandidateItem, GeminiError, PromptContext, RecommendationClient, RecommendationResult,
};

/// Proposes an outfit from a candidate list.
///
/// Implementations make a single attempt and report every failure as an
/// error; the orchestrator bounds the call with its own timeout and treats
/// any error as a reason to fall back.
#[async_trait]
pub trait OutfitAdvisor: Send + Sync {
    async fn propose(
        &self,
        candidates: &[CandidateItem],
        context: &PromptContext<'_>,
    ) -> Result<RecommendationResult, GeminiError>;
}

#[async_trait]
impl OutfitAdvisor for RecommendationClient {
    async fn propose(
        &self,
        candidates: &[CandidateItem],
        context: &PromptContext<'_>,
    ) -> Result<RecommendationResult, GeminiError> {
        RecommendationClient::propose(self, candidates, context).await
    }
}

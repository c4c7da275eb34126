//! Append-only storage of past recommendations.

use async_trait::async_trait;
use fittim_core::types::DbId;
use fittim_db::models::fit_history::{CreateFitHistory, FitHistory, FitHistorySummaryRow};

use crate::error::PipelineError;

/// Writes and reads a user's recommendation history.
///
/// `append` must store the whole row or nothing. Rows are never updated.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Persist a new entry, returning it with its id and timestamp.
    async fn append(&self, entry: CreateFitHistory) -> Result<FitHistory, PipelineError>;

    /// The user's `limit` most recent entries, newest first.
    async fn list_recent(&self, user_id: DbId, limit: i64) -> Result<Vec<FitHistory>, PipelineError>;

    /// Same ordering as `list_recent`, with each entry's representative
    /// image (the outer's when present, otherwise the top's).
    async fn list_summaries(
        &self,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<FitHistorySummaryRow>, PipelineError>;
}

use fittim_core::error::CoreError;

/// Errors that escape the recommendation pipeline.
///
/// AI failures never appear here: they are absorbed by the fallback.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A domain-level error (invalid input, insufficient wardrobe, not found).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

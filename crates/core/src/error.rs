use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The wardrobe cannot form an outfit (no top or no bottom available).
    #[error("Insufficient wardrobe: {0}")]
    InsufficientWardrobe(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

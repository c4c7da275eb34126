//! Outfit recommendation pipeline.
//!
//! Loads the seasonal wardrobe, asks the AI advisor for a pick, validates it
//! against the wardrobe, falls back to a random outfit when the AI path is
//! unusable, and appends the decision to the user's history.
//!
//! Storage and the AI service sit behind the [`WardrobeSource`],
//! [`HistoryStore`] and [`OutfitAdvisor`] traits so the orchestrator can be
//! exercised with in-memory fakes.

pub mod advisor;
pub mod error;
pub mod fallback;
pub mod history;
pub mod postgres;
pub mod recommend;
pub mod selection;
pub mod wardrobe;

pub use advisor::OutfitAdvisor;
pub use error::PipelineError;
pub use fallback::FallbackSelector;
pub use history::HistoryStore;
pub use recommend::{RecommendRequest, Recommender};
pub use selection::{OutfitSelection, Provenance};
pub use wardrobe::{PartitionedWardrobe, WardrobeQuery, WardrobeSource};

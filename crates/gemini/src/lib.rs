//! Gemini client for outfit recommendations.
//!
//! Provides the `generateContent` REST wrapper, the stylist prompt builder,
//! and the tolerant parser that turns the model's free text into a
//! [`RecommendationResult`](response::RecommendationResult).

pub mod api;
pub mod client;
pub mod prompt;
pub mod response;

pub use api::{GeminiApi, GeminiError};
pub use client::RecommendationClient;
pub use prompt::{CandidateItem, PromptContext};
pub use response::RecommendationResult;

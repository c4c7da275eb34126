//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?limit=` for history listings. Clamped by the pipeline.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// `?category=&season=` for wardrobe listings.
///
/// Kept as raw strings so unknown values surface as validation errors rather
/// than extractor rejections, and so `ALL` can mean "no filter".
#[derive(Debug, Default, Deserialize)]
pub struct WardrobeFilterParams {
    pub category: Option<String>,
    pub season: Option<String>,
}

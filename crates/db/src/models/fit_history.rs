//! Fit history entity model, insert DTO and presentation views.

use fittim_core::recommendation::history_title;
use fittim_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::wardrobe_item::WardrobeItem;

/// A row from the append-only `fit_histories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FitHistory {
    pub id: DbId,
    pub user_id: DbId,
    pub top_id: DbId,
    pub bottom_id: DbId,
    pub outer_id: Option<DbId>,
    pub place: String,
    pub mood: String,
    pub season: String,
    pub reason: String,
    pub created_at: Timestamp,
}

/// DTO for appending a history row.
#[derive(Debug, Clone)]
pub struct CreateFitHistory {
    pub user_id: DbId,
    pub top_id: DbId,
    pub bottom_id: DbId,
    pub outer_id: Option<DbId>,
    pub place: String,
    pub mood: String,
    pub season: String,
    pub reason: String,
}

/// History row joined with the representative image (outer, else top).
#[derive(Debug, Clone, FromRow)]
pub struct FitHistorySummaryRow {
    pub id: DbId,
    pub place: String,
    pub mood: String,
    pub season: String,
    pub reason: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

/// List view of a history entry.
#[derive(Debug, Clone, Serialize)]
pub struct FitHistorySummary {
    pub id: DbId,
    pub title: String,
    pub place: String,
    pub mood: String,
    pub season: String,
    pub reason: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

impl From<FitHistorySummaryRow> for FitHistorySummary {
    fn from(row: FitHistorySummaryRow) -> Self {
        Self {
            id: row.id,
            title: history_title(Some(&row.place)),
            place: row.place,
            mood: row.mood,
            season: row.season,
            reason: row.reason,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

/// Detail view of a history entry with its items resolved.
#[derive(Debug, Clone, Serialize)]
pub struct FitHistoryDetail {
    pub id: DbId,
    pub title: String,
    pub place: String,
    pub mood: String,
    pub season: String,
    pub reason: String,
    pub created_at: Timestamp,
    pub top: WardrobeItem,
    pub bottom: WardrobeItem,
    pub outer: Option<WardrobeItem>,
}

impl FitHistoryDetail {
    pub fn new(
        history: FitHistory,
        top: WardrobeItem,
        bottom: WardrobeItem,
        outer: Option<WardrobeItem>,
    ) -> Self {
        Self {
            id: history.id,
            title: history_title(Some(&history.place)),
            place: history.place,
            mood: history.mood,
            season: history.season,
            reason: history.reason,
            created_at: history.created_at,
            top,
            bottom,
            outer,
        }
    }
}

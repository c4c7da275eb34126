//! Wardrobe item entity model and DTOs.

use fittim_core::error::CoreError;
use fittim_core::types::{DbId, Timestamp};
use fittim_core::wardrobe::{Category, Season};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A clothing item row from the `wardrobe_items` table.
///
/// `category` and `season` are stored as upper-case TEXT guarded by CHECK
/// constraints; use [`WardrobeItem::category`] / [`WardrobeItem::season`]
/// for the typed values.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WardrobeItem {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub user_id: DbId,
    #[serde(rename = "category")]
    #[sqlx(rename = "category")]
    pub category_name: String,
    #[serde(rename = "season")]
    #[sqlx(rename = "season")]
    pub season_name: String,
    pub image_url: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub colors: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl WardrobeItem {
    pub fn category(&self) -> Result<Category, CoreError> {
        Category::from_name(&self.category_name)
    }

    pub fn season(&self) -> Result<Season, CoreError> {
        Season::from_name(&self.season_name)
    }
}

/// DTO for creating a new wardrobe item.
///
/// The image itself is uploaded elsewhere; only its URL is recorded here.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWardrobeItem {
    pub category: Category,
    pub season: Season,
    pub image_url: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
}

/// DTO for a full replace (`PUT`).
///
/// Every field is written: an omitted `name`/`brand` becomes NULL and an
/// omitted `colors` becomes empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceWardrobeItem {
    pub category: Category,
    pub season: Season,
    pub name: Option<String>,
    pub brand: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
}

/// DTO for a partial merge (`PATCH`). Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchWardrobeItem {
    pub category: Option<Category>,
    pub season: Option<Season>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub colors: Option<Vec<String>>,
}

//! Picked outfits: the intermediate pick and the final answer.

use fittim_core::types::DbId;
use fittim_core::wardrobe::Season;
use fittim_db::models::wardrobe_item::WardrobeItem;
use serde::Serialize;

/// Where an outfit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Ai,
    Fallback,
}

/// An outfit chosen from a wardrobe, borrowing its items.
#[derive(Debug, Clone)]
pub struct OutfitPick<'a> {
    pub top: &'a WardrobeItem,
    pub bottom: &'a WardrobeItem,
    pub outer: Option<&'a WardrobeItem>,
    pub reason: String,
    pub source: Provenance,
}

/// Final recommendation returned to the caller. Mirrors the persisted
/// history row.
#[derive(Debug, Clone, Serialize)]
pub struct OutfitSelection {
    pub history_id: DbId,
    pub place: String,
    pub mood: String,
    pub season: Season,
    pub top: WardrobeItem,
    pub bottom: WardrobeItem,
    pub outer: Option<WardrobeItem>,
    pub reason: String,
    pub source: Provenance,
}

//! Seasonal wardrobe loading and category partitioning.

use async_trait::async_trait;
use fittim_core::error::CoreError;
use fittim_core::types::DbId;
use fittim_core::wardrobe::{Category, Season};
use fittim_db::models::wardrobe_item::WardrobeItem;
use fittim_gemini::{CandidateItem, RecommendationResult};

use crate::error::PipelineError;
use crate::selection::{OutfitPick, Provenance};

/// Read access to users' wardrobes.
#[async_trait]
pub trait WardrobeSource: Send + Sync {
    /// Whether the user exists at all.
    async fn user_exists(&self, user_id: DbId) -> Result<bool, PipelineError>;

    /// Items eligible for `season` (the season itself plus `ALL`-tagged
    /// items, or everything for [`Season::All`]).
    ///
    /// Implementations may return a superset; [`WardrobeQuery::fetch`]
    /// re-applies the eligibility rule and the ordering.
    async fn items_for_season(
        &self,
        user_id: DbId,
        season: Season,
    ) -> Result<Vec<WardrobeItem>, PipelineError>;
}

/// A user's eligible items, newest first, split by outfit role.
///
/// `items` keeps every eligible item (including categories that never take
/// part in an outfit); `tops`, `bottoms` and `outers` are disjoint.
#[derive(Debug, Clone, Default)]
pub struct PartitionedWardrobe {
    pub items: Vec<WardrobeItem>,
    pub tops: Vec<WardrobeItem>,
    pub bottoms: Vec<WardrobeItem>,
    pub outers: Vec<WardrobeItem>,
}

impl PartitionedWardrobe {
    /// Partition items that are already filtered and ordered newest first.
    pub fn from_items(items: Vec<WardrobeItem>) -> Self {
        let mut tops = Vec::new();
        let mut bottoms = Vec::new();
        let mut outers = Vec::new();

        for item in &items {
            match item.category() {
                Ok(Category::Top) => tops.push(item.clone()),
                Ok(Category::Bottom) => bottoms.push(item.clone()),
                Ok(Category::Outer) => outers.push(item.clone()),
                Ok(Category::Shoes) => {}
                Err(e) => {
                    tracing::warn!(item_id = item.id, error = %e, "Skipping item with unknown category");
                }
            }
        }

        Self {
            items,
            tops,
            bottoms,
            outers,
        }
    }

    /// Whether at least one top and one bottom are available.
    pub fn can_form_outfit(&self) -> bool {
        !self.tops.is_empty() && !self.bottoms.is_empty()
    }

    /// The `limit` most recent items, in the compact form shown to the AI.
    pub fn ai_candidates(&self, limit: usize) -> Vec<CandidateItem> {
        self.items
            .iter()
            .filter_map(|item| {
                Some(CandidateItem {
                    id: item.id,
                    category: item.category().ok()?,
                    season: item.season().ok()?,
                })
            })
            .take(limit)
            .collect()
    }

    /// Resolve an AI proposal against the full wardrobe.
    ///
    /// Each id must name an item of the matching role; unknown ids resolve to
    /// nothing. Returns `None` unless both a top and a bottom resolve. The
    /// outer is only present when the AI named a valid one.
    pub fn resolve(&self, result: &RecommendationResult) -> Option<OutfitPick<'_>> {
        let top = find(&self.tops, result.top_id)?;
        let bottom = find(&self.bottoms, result.bottom_id)?;
        let outer = find(&self.outers, result.outer_id);

        Some(OutfitPick {
            top,
            bottom,
            outer,
            reason: fittim_core::recommendation::resolve_ai_reason(result.reason.as_deref()),
            source: Provenance::Ai,
        })
    }
}

fn find(items: &[WardrobeItem], id: Option<DbId>) -> Option<&WardrobeItem> {
    let id = id?;
    items.iter().find(|item| item.id == id)
}

/// Loads the wardrobe a recommendation draws from.
pub struct WardrobeQuery;

impl WardrobeQuery {
    /// Fetch the user's items eligible for `season`, newest first, partitioned.
    ///
    /// Fails with [`CoreError::NotFound`] for an unknown user. An empty
    /// wardrobe is not an error.
    pub async fn fetch(
        source: &dyn WardrobeSource,
        user_id: DbId,
        season: Season,
    ) -> Result<PartitionedWardrobe, PipelineError> {
        if !source.user_exists(user_id).await? {
            return Err(CoreError::NotFound {
                entity: "User",
                id: user_id,
            }
            .into());
        }

        let mut items = source.items_for_season(user_id, season).await?;
        items.retain(|item| match item.season() {
            Ok(item_season) => season.includes(item_season),
            Err(e) => {
                tracing::warn!(item_id = item.id, error = %e, "Skipping item with unknown season");
                false
            }
        });
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(PartitionedWardrobe::from_items(items))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

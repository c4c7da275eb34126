//! Random outfit selection used when the AI path is unusable.

use std::sync::Mutex;

use fittim_core::recommendation::FALLBACK_REASON;
use fittim_core::wardrobe::Season;
use fittim_db::models::wardrobe_item::WardrobeItem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::selection::{OutfitPick, Provenance};

/// Picks a uniformly random outfit from a shared random source.
///
/// The generator is seeded once and shared across requests; the lock is only
/// held while indices are drawn.
pub struct FallbackSelector {
    rng: Mutex<StdRng>,
}

impl FallbackSelector {
    /// Seed from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic selector for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Choose one top and one bottom, plus an outer in cold seasons.
    ///
    /// An outer is only added when `season` is FALL, WINTER or ALL and
    /// `outers` is non-empty. Returns `None` if `tops` or `bottoms` is empty.
    pub fn choose<'a>(
        &self,
        tops: &'a [WardrobeItem],
        bottoms: &'a [WardrobeItem],
        outers: &'a [WardrobeItem],
        season: Season,
    ) -> Option<OutfitPick<'a>> {
        if tops.is_empty() || bottoms.is_empty() {
            return None;
        }

        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let top = &tops[rng.random_range(0..tops.len())];
        let bottom = &bottoms[rng.random_range(0..bottoms.len())];
        let outer = if season.wants_outer() && !outers.is_empty() {
            Some(&outers[rng.random_range(0..outers.len())])
        } else {
            None
        };

        Some(OutfitPick {
            top,
            bottom,
            outer,
            reason: FALLBACK_REASON.to_string(),
            source: Provenance::Fallback,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use fittim_core::types::DbId;

    use super::*;

    fn item(id: DbId, category: &str) -> WardrobeItem {
        WardrobeItem {
            id,
            user_id: 1,
            category_name: category.to_string(),
            season_name: "ALL".to_string(),
            image_url: None,
            name: None,
            brand: None,
            colors: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn closet() -> (Vec<WardrobeItem>, Vec<WardrobeItem>, Vec<WardrobeItem>) {
        (
            vec![item(1, "TOP"), item(2, "TOP"), item(3, "TOP")],
            vec![item(10, "BOTTOM"), item(11, "BOTTOM")],
            vec![item(20, "OUTER")],
        )
    }

    #[test]
    fn empty_tops_or_bottoms_yield_none() {
        let (tops, bottoms, outers) = closet();
        let selector = FallbackSelector::seeded(1);
        assert!(selector.choose(&[], &bottoms, &outers, Season::All).is_none());
        assert!(selector.choose(&tops, &[], &outers, Season::All).is_none());
    }

    #[test]
    fn warm_seasons_never_get_an_outer() {
        let (tops, bottoms, outers) = closet();
        let selector = FallbackSelector::seeded(7);
        for season in [Season::Spring, Season::Summer] {
            let pick = selector.choose(&tops, &bottoms, &outers, season).unwrap();
            assert!(pick.outer.is_none());
        }
    }

    #[test]
    fn cold_seasons_get_an_outer_when_available() {
        let (tops, bottoms, outers) = closet();
        let selector = FallbackSelector::seeded(7);
        for season in [Season::Fall, Season::Winter, Season::All] {
            let pick = selector.choose(&tops, &bottoms, &outers, season).unwrap();
            assert_eq!(pick.outer.map(|o| o.id), Some(20));
        }
        let pick = selector.choose(&tops, &bottoms, &[], Season::Winter).unwrap();
        assert!(pick.outer.is_none());
    }

    #[test]
    fn picks_carry_the_fallback_marker() {
        let (tops, bottoms, outers) = closet();
        let pick = FallbackSelector::seeded(3)
            .choose(&tops, &bottoms, &outers, Season::Summer)
            .unwrap();
        assert_eq!(pick.reason, FALLBACK_REASON);
        assert_eq!(pick.source, Provenance::Fallback);
    }

    #[test]
    fn same_seed_same_picks() {
        let (tops, bottoms, outers) = closet();
        let a = FallbackSelector::seeded(42);
        let b = FallbackSelector::seeded(42);
        for _ in 0..10 {
            let pa = a.choose(&tops, &bottoms, &outers, Season::Winter).unwrap();
            let pb = b.choose(&tops, &bottoms, &outers, Season::Winter).unwrap();
            assert_eq!(pa.top.id, pb.top.id);
            assert_eq!(pa.bottom.id, pb.bottom.id);
        }
    }

    #[test]
    fn every_top_is_reachable() {
        let (tops, bottoms, outers) = closet();
        let selector = FallbackSelector::seeded(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let pick = selector.choose(&tops, &bottoms, &outers, Season::Summer).unwrap();
            seen.insert(pick.top.id);
        }
        assert_eq!(seen.len(), tops.len());
    }
}

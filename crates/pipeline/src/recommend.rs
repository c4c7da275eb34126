//! Recommendation orchestrator.
//!
//! One call is a single pass:
//!
//! ```text
//! parse season ─► load wardrobe ─► AI attempt ─► validate ─► persist ─► answer
//!                                      │             │
//!                                      └─ error ─────┴─ invalid ─► random fallback
//! ```
//!
//! Only invalid input, an insufficient wardrobe, an unknown user and storage
//! failures escape; every AI-path failure ends in the fallback.

use std::sync::Arc;
use std::time::Duration;

use fittim_core::error::CoreError;
use fittim_core::recommendation::{
    clamp_history_limit, resolve_mood, resolve_weather, AI_CANDIDATE_LIMIT,
    INSUFFICIENT_WARDROBE_MESSAGE,
};
use fittim_core::types::DbId;
use fittim_core::wardrobe::Season;
use fittim_db::models::fit_history::{CreateFitHistory, FitHistory, FitHistorySummary};
use fittim_db::DbPool;
use fittim_gemini::PromptContext;
use serde::Deserialize;

use crate::advisor::OutfitAdvisor;
use crate::error::PipelineError;
use crate::fallback::FallbackSelector;
use crate::history::HistoryStore;
use crate::postgres::{PgHistoryStore, PgWardrobeSource};
use crate::selection::{OutfitPick, OutfitSelection};
use crate::wardrobe::{PartitionedWardrobe, WardrobeQuery, WardrobeSource};

/// Situation a recommendation is requested for.
///
/// `place` is free text and may be blank or absent; history titles then use
/// the default place label.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub place: String,
    pub mood: Option<String>,
    pub season: String,
    pub weather: Option<String>,
}

/// Composes wardrobe loading, the AI advisor, the fallback and history.
pub struct Recommender {
    wardrobe: Arc<dyn WardrobeSource>,
    history: Arc<dyn HistoryStore>,
    advisor: Arc<dyn OutfitAdvisor>,
    fallback: FallbackSelector,
    ai_timeout: Duration,
}

impl Recommender {
    pub fn new(
        wardrobe: Arc<dyn WardrobeSource>,
        history: Arc<dyn HistoryStore>,
        advisor: Arc<dyn OutfitAdvisor>,
        fallback: FallbackSelector,
        ai_timeout: Duration,
    ) -> Self {
        Self {
            wardrobe,
            history,
            advisor,
            fallback,
            ai_timeout,
        }
    }

    /// Recommender backed by Postgres for wardrobe and history.
    pub fn with_postgres(pool: DbPool, advisor: Arc<dyn OutfitAdvisor>, ai_timeout: Duration) -> Self {
        Self::new(
            Arc::new(PgWardrobeSource::new(pool.clone())),
            Arc::new(PgHistoryStore::new(pool)),
            advisor,
            FallbackSelector::from_os_rng(),
            ai_timeout,
        )
    }

    /// Recommend an outfit for `user_id` and record it in the history.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Validation`] for an unknown season (checked before any
    ///   wardrobe read).
    /// - [`CoreError::NotFound`] for an unknown user.
    /// - [`CoreError::InsufficientWardrobe`] when no top or no bottom is
    ///   eligible; the AI is not consulted.
    pub async fn recommend(
        &self,
        user_id: DbId,
        request: &RecommendRequest,
    ) -> Result<OutfitSelection, PipelineError> {
        let season = Season::from_name(&request.season)?;
        let place = request.place.as_str();
        let mood = resolve_mood(request.mood.as_deref());
        let weather = resolve_weather(request.weather.as_deref());

        let wardrobe = WardrobeQuery::fetch(self.wardrobe.as_ref(), user_id, season).await?;
        if !wardrobe.can_form_outfit() {
            tracing::info!(
                user_id,
                season = %season,
                tops = wardrobe.tops.len(),
                bottoms = wardrobe.bottoms.len(),
                "Wardrobe cannot form an outfit",
            );
            return Err(CoreError::InsufficientWardrobe(INSUFFICIENT_WARDROBE_MESSAGE.into()).into());
        }

        let context = PromptContext {
            place,
            mood: &mood,
            season,
            weather: &weather,
        };

        let pick = match self.ask_advisor(user_id, &wardrobe, &context).await {
            Some(pick) => pick,
            None => self
                .fallback
                .choose(&wardrobe.tops, &wardrobe.bottoms, &wardrobe.outers, season)
                .ok_or_else(|| CoreError::InsufficientWardrobe(INSUFFICIENT_WARDROBE_MESSAGE.into()))?,
        };

        let entry = CreateFitHistory {
            user_id,
            top_id: pick.top.id,
            bottom_id: pick.bottom.id,
            outer_id: pick.outer.map(|outer| outer.id),
            place: place.to_string(),
            mood: mood.clone(),
            season: season.name().to_string(),
            reason: pick.reason.clone(),
        };
        let history = self.history.append(entry).await?;

        tracing::info!(
            user_id,
            history_id = history.id,
            source = ?pick.source,
            top_id = pick.top.id,
            bottom_id = pick.bottom.id,
            outer_id = ?pick.outer.map(|outer| outer.id),
            "Outfit recommended",
        );

        Ok(OutfitSelection {
            history_id: history.id,
            place: history.place,
            mood: history.mood,
            season,
            top: pick.top.clone(),
            bottom: pick.bottom.clone(),
            outer: pick.outer.cloned(),
            reason: history.reason,
            source: pick.source,
        })
    }

    /// The user's most recent history entries, newest first.
    ///
    /// `limit` is clamped to `[1, 50]` and defaults to 10.
    pub async fn history(
        &self,
        user_id: DbId,
        limit: Option<i64>,
    ) -> Result<Vec<FitHistory>, PipelineError> {
        self.ensure_user(user_id).await?;
        self.history
            .list_recent(user_id, clamp_history_limit(limit))
            .await
    }

    /// List view of [`Recommender::history`]: titled entries with their
    /// representative image.
    pub async fn history_summaries(
        &self,
        user_id: DbId,
        limit: Option<i64>,
    ) -> Result<Vec<FitHistorySummary>, PipelineError> {
        self.ensure_user(user_id).await?;
        let rows = self
            .history
            .list_summaries(user_id, clamp_history_limit(limit))
            .await?;
        Ok(rows.into_iter().map(FitHistorySummary::from).collect())
    }

    async fn ensure_user(&self, user_id: DbId) -> Result<(), PipelineError> {
        if !self.wardrobe.user_exists(user_id).await? {
            return Err(CoreError::NotFound {
                entity: "User",
                id: user_id,
            }
            .into());
        }
        Ok(())
    }

    /// Single bounded AI attempt. `None` means "fall back".
    async fn ask_advisor<'w>(
        &self,
        user_id: DbId,
        wardrobe: &'w PartitionedWardrobe,
        context: &PromptContext<'_>,
    ) -> Option<OutfitPick<'w>> {
        let candidates = wardrobe.ai_candidates(AI_CANDIDATE_LIMIT);

        let result = match tokio::time::timeout(
            self.ai_timeout,
            self.advisor.propose(&candidates, context),
        )
        .await
        {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                tracing::warn!(user_id, error = %e, "AI recommendation failed, falling back to random");
                return None;
            }
            Err(_) => {
                tracing::warn!(
                    user_id,
                    timeout_ms = self.ai_timeout.as_millis() as u64,
                    "AI recommendation timed out, falling back to random",
                );
                return None;
            }
        };

        let pick = wardrobe.resolve(&result);
        if pick.is_none() {
            tracing::warn!(
                user_id,
                top_id = ?result.top_id,
                bottom_id = ?result.bottom_id,
                "AI pick did not resolve to a top and a bottom, falling back to random",
            );
        }
        pick
    }
}

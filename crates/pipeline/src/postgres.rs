//! Postgres-backed [`WardrobeSource`] and [`HistoryStore`].

use async_trait::async_trait;
use fittim_core::types::DbId;
use fittim_core::wardrobe::Season;
use fittim_db::models::fit_history::{CreateFitHistory, FitHistory, FitHistorySummaryRow};
use fittim_db::models::wardrobe_item::WardrobeItem;
use fittim_db::repositories::{FitHistoryRepo, UserRepo, WardrobeItemRepo};
use fittim_db::DbPool;

use crate::error::PipelineError;
use crate::history::HistoryStore;
use crate::wardrobe::WardrobeSource;

/// Reads wardrobes through [`WardrobeItemRepo`].
#[derive(Clone)]
pub struct PgWardrobeSource {
    pool: DbPool,
}

impl PgWardrobeSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WardrobeSource for PgWardrobeSource {
    async fn user_exists(&self, user_id: DbId) -> Result<bool, PipelineError> {
        Ok(UserRepo::exists(&self.pool, user_id).await?)
    }

    async fn items_for_season(
        &self,
        user_id: DbId,
        season: Season,
    ) -> Result<Vec<WardrobeItem>, PipelineError> {
        Ok(WardrobeItemRepo::list_for_season(&self.pool, user_id, season).await?)
    }
}

/// Stores history through [`FitHistoryRepo`]. Each append is one INSERT.
#[derive(Clone)]
pub struct PgHistoryStore {
    pool: DbPool,
}

impl PgHistoryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn append(&self, entry: CreateFitHistory) -> Result<FitHistory, PipelineError> {
        Ok(FitHistoryRepo::create(&self.pool, &entry).await?)
    }

    async fn list_recent(&self, user_id: DbId, limit: i64) -> Result<Vec<FitHistory>, PipelineError> {
        Ok(FitHistoryRepo::list_recent(&self.pool, user_id, limit).await?)
    }

    async fn list_summaries(
        &self,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<FitHistorySummaryRow>, PipelineError> {
        Ok(FitHistoryRepo::list_summaries(&self.pool, user_id, limit).await?)
    }
}

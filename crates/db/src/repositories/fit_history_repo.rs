//! Repository for the append-only `fit_histories` table.
//!
//! A history row is written once per recommendation and never updated or
//! deleted here.

use fittim_core::types::DbId;
use sqlx::PgPool;

use crate::models::fit_history::{CreateFitHistory, FitHistory, FitHistorySummaryRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, top_id, bottom_id, outer_id, place, mood, season, reason, \
                       created_at";

/// Provides append and newest-first reads for outfit history.
pub struct FitHistoryRepo;

impl FitHistoryRepo {
    /// Append a history row, returning it with its generated id and timestamp.
    pub async fn create(pool: &PgPool, input: &CreateFitHistory) -> Result<FitHistory, sqlx::Error> {
        let query = format!(
            "INSERT INTO fit_histories
                (user_id, top_id, bottom_id, outer_id, place, mood, season, reason)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FitHistory>(&query)
            .bind(input.user_id)
            .bind(input.top_id)
            .bind(input.bottom_id)
            .bind(input.outer_id)
            .bind(&input.place)
            .bind(&input.mood)
            .bind(&input.season)
            .bind(&input.reason)
            .fetch_one(pool)
            .await
    }

    /// The user's most recent history rows, newest first.
    pub async fn list_recent(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<FitHistory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fit_histories
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, FitHistory>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Newest-first summaries with the representative image resolved
    /// (the outer's image when an outer was picked, otherwise the top's).
    pub async fn list_summaries(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<FitHistorySummaryRow>, sqlx::Error> {
        sqlx::query_as::<_, FitHistorySummaryRow>(
            "SELECT h.id, h.place, h.mood, h.season, h.reason,
                    COALESCE(o.image_url, t.image_url) AS image_url,
                    h.created_at
             FROM fit_histories h
             JOIN wardrobe_items t ON t.id = h.top_id
             LEFT JOIN wardrobe_items o ON o.id = h.outer_id
             WHERE h.user_id = $1
             ORDER BY h.created_at DESC, h.id DESC
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Find one of the user's history rows by ID.
    pub async fn find_for_user(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<FitHistory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fit_histories WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, FitHistory>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}

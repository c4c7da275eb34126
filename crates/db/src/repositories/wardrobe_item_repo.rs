//! Repository for the `wardrobe_items` table.
//!
//! Every query is scoped by `user_id`: an item belonging to another user is
//! indistinguishable from a missing one.

use fittim_core::types::DbId;
use fittim_core::wardrobe::{Category, Season};
use sqlx::PgPool;

use crate::models::wardrobe_item::{
    CreateWardrobeItem, PatchWardrobeItem, ReplaceWardrobeItem, WardrobeItem,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, category, season, image_url, name, brand, colors, \
                       created_at, updated_at";

/// Newest-first ordering with a stable tie-break.
const NEWEST_FIRST: &str = "ORDER BY created_at DESC, id DESC";

/// Provides CRUD operations and recommendation reads for wardrobe items.
pub struct WardrobeItemRepo;

impl WardrobeItemRepo {
    /// Insert a new item for `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateWardrobeItem,
    ) -> Result<WardrobeItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO wardrobe_items (user_id, category, season, image_url, name, brand, colors)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WardrobeItem>(&query)
            .bind(user_id)
            .bind(input.category.name())
            .bind(input.season.name())
            .bind(&input.image_url)
            .bind(&input.name)
            .bind(&input.brand)
            .bind(&input.colors)
            .fetch_one(pool)
            .await
    }

    /// Find one of the user's items by ID.
    pub async fn find_for_user(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<WardrobeItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wardrobe_items WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, WardrobeItem>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the user's items, newest first, with optional exact-match filters.
    ///
    /// `None` means "no filter" for either dimension.
    pub async fn list_filtered(
        pool: &PgPool,
        user_id: DbId,
        category: Option<Category>,
        season: Option<Season>,
    ) -> Result<Vec<WardrobeItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wardrobe_items
             WHERE user_id = $1
               AND ($2::TEXT IS NULL OR category = $2)
               AND ($3::TEXT IS NULL OR season = $3)
             {NEWEST_FIRST}"
        );
        sqlx::query_as::<_, WardrobeItem>(&query)
            .bind(user_id)
            .bind(category.map(Category::name))
            .bind(season.map(Season::name))
            .fetch_all(pool)
            .await
    }

    /// Items eligible for a recommendation in `season`, newest first.
    ///
    /// For [`Season::All`] this is the whole wardrobe; otherwise it is the
    /// items tagged with `season` plus the season-agnostic (`ALL`) ones.
    pub async fn list_for_season(
        pool: &PgPool,
        user_id: DbId,
        season: Season,
    ) -> Result<Vec<WardrobeItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wardrobe_items
             WHERE user_id = $1
               AND ($2::TEXT = 'ALL' OR season = $2 OR season = 'ALL')
             {NEWEST_FIRST}"
        );
        sqlx::query_as::<_, WardrobeItem>(&query)
            .bind(user_id)
            .bind(season.name())
            .fetch_all(pool)
            .await
    }

    /// The user's most recently added items.
    pub async fn list_recent(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<WardrobeItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wardrobe_items WHERE user_id = $1 {NEWEST_FIRST} LIMIT $2"
        );
        sqlx::query_as::<_, WardrobeItem>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every editable field of an item.
    ///
    /// Returns `None` if the user owns no item with the given `id`.
    pub async fn replace(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &ReplaceWardrobeItem,
    ) -> Result<Option<WardrobeItem>, sqlx::Error> {
        let query = format!(
            "UPDATE wardrobe_items SET
                category = $3,
                season = $4,
                name = $5,
                brand = $6,
                colors = $7,
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WardrobeItem>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.category.name())
            .bind(input.season.name())
            .bind(&input.name)
            .bind(&input.brand)
            .bind(&input.colors)
            .fetch_optional(pool)
            .await
    }

    /// Merge an item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the user owns no item with the given `id`.
    pub async fn patch(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &PatchWardrobeItem,
    ) -> Result<Option<WardrobeItem>, sqlx::Error> {
        let query = format!(
            "UPDATE wardrobe_items SET
                category = COALESCE($3, category),
                season = COALESCE($4, season),
                name = COALESCE($5, name),
                brand = COALESCE($6, brand),
                colors = COALESCE($7, colors),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WardrobeItem>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.category.map(Category::name))
            .bind(input.season.map(Season::name))
            .bind(&input.name)
            .bind(&input.brand)
            .bind(&input.colors)
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the user's items. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while a history entry references
    /// the item.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wardrobe_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

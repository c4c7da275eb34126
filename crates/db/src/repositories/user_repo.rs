//! Repository for the `users` table.

use fittim_core::profile::Gender;
use fittim_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, PatchUserProfile, ReplaceUserProfile, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, nickname, height, weight, body_type, gender, \
                       preferred_styles, preferred_malls, created_at, updated_at";

/// Provides lookups for wardrobe owners and profile updates.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with an empty profile, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, nickname)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.nickname)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a user with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every profile field.
    ///
    /// Returns `None` if no user has the given `id`.
    pub async fn replace_profile(
        pool: &PgPool,
        id: DbId,
        input: &ReplaceUserProfile,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                height = $2,
                weight = $3,
                body_type = $4,
                gender = $5,
                preferred_styles = $6,
                preferred_malls = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(input.height)
            .bind(input.weight)
            .bind(&input.body_type)
            .bind(input.gender.map(Gender::name))
            .bind(&input.preferred_styles)
            .bind(&input.preferred_malls)
            .fetch_optional(pool)
            .await
    }

    /// Merge the profile. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no user has the given `id`.
    pub async fn patch_profile(
        pool: &PgPool,
        id: DbId,
        input: &PatchUserProfile,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                height = COALESCE($2, height),
                weight = COALESCE($3, weight),
                body_type = COALESCE($4, body_type),
                gender = COALESCE($5, gender),
                preferred_styles = COALESCE($6, preferred_styles),
                preferred_malls = COALESCE($7, preferred_malls),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(input.height)
            .bind(input.weight)
            .bind(&input.body_type)
            .bind(input.gender.map(Gender::name))
            .bind(&input.preferred_styles)
            .bind(&input.preferred_malls)
            .fetch_optional(pool)
            .await
    }
}

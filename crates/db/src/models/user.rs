//! User entity model and DTOs.

use fittim_core::profile::Gender;
use fittim_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user row from the `users` table, including the profile columns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub nickname: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub body_type: Option<String>,
    #[serde(rename = "gender")]
    #[sqlx(rename = "gender")]
    pub gender_name: Option<String>,
    pub preferred_styles: Vec<String>,
    pub preferred_malls: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub nickname: String,
}

/// DTO for a full profile replace (`PUT /users/me`).
///
/// Omitted scalars become NULL and omitted lists become empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplaceUserProfile {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub body_type: Option<String>,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub preferred_styles: Vec<String>,
    #[serde(default)]
    pub preferred_malls: Vec<String>,
}

/// DTO for a partial profile merge (`PATCH /users/me`).
///
/// Omitted fields are left unchanged; a provided list replaces the stored one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchUserProfile {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub body_type: Option<String>,
    pub gender: Option<Gender>,
    pub preferred_styles: Option<Vec<String>>,
    pub preferred_malls: Option<Vec<String>>,
}

//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for inserts and updates

pub mod fit_history;
pub mod user;
pub mod wardrobe_item;

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod fit_history_repo;
pub mod user_repo;
pub mod wardrobe_item_repo;

pub use fit_history_repo::FitHistoryRepo;
pub use user_repo::UserRepo;
pub use wardrobe_item_repo::WardrobeItemRepo;

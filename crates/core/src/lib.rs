//! Domain primitives shared by every Fittim crate.
//!
//! Zero internal dependencies: ids, timestamps, the domain error type,
//! wardrobe and profile enums, and the pure rules of the recommendation pipeline.

pub mod error;
pub mod profile;
pub mod recommendation;
pub mod types;
pub mod wardrobe;

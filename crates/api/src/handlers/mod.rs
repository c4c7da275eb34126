pub mod fits;
pub mod users;
pub mod wardrobe;

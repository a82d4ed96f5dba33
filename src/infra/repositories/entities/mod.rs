//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod book;
pub mod seller;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use book::{ActiveModel as BookActiveModel, Entity as BookEntity, Model as BookModel};
#[allow(unused_imports)]
pub use seller::{ActiveModel as SellerActiveModel, Entity as SellerEntity, Model as SellerModel};

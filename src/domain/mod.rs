//! Domain layer - Core business entities and logic
//!
//! Entities, value objects and the outbound response shapes. Field
//! constraints live in [`validation`] as plain predicates.

pub mod book;
pub mod password;
pub mod seller;
pub mod validation;

pub use book::{Book, BookDraft, BookListResponse, BookResponse, NestedBookResponse};
pub use password::Password;
pub use seller::{
    CreateSeller, NewSeller, Seller, SellerChanges, SellerListResponse, SellerResponse,
    SellerWithBooks, SellerWithBooksResponse,
};

//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure. They depend on
//! the `UnitOfWork` abstraction rather than on concrete repositories.

mod book_service;
pub mod container;
mod seller_service;

#[cfg(test)]
mod test_support;

pub use book_service::{BookManager, BookService};
pub use container::{ServiceContainer, Services};
pub use seller_service::{SellerManager, SellerService};

//! Bookstore API - sellers and the books they own
//!
//! A CRUD HTTP API over two related resources, built on Axum and SeaORM.
//! Every seller may own many books; deleting a seller removes its books.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, response shapes and field constraints
//! - **services**: Application use cases
//! - **infra**: Database, migrations, repositories and the Unit of Work
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 8000
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Book, Password, Seller};
pub use errors::{AppError, AppResult};

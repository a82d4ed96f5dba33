//! Application state - Dependency injection container.
//!
//! Handlers get every dependency through this state; there is no global
//! database session.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{BookService, SellerService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Seller service
    pub seller_service: Arc<dyn SellerService>,
    /// Book service
    pub book_service: Arc<dyn BookService>,
    /// Database connection, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire every service over the given database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            seller_service: container.sellers(),
            book_service: container.books(),
            database,
        }
    }
}

//! Service Container - Centralized service access.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{BookManager, BookService, SellerManager, SellerService};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get seller service
    fn sellers(&self) -> Arc<dyn SellerService>;

    /// Get book service
    fn books(&self) -> Arc<dyn BookService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    seller_service: Arc<dyn SellerService>,
    book_service: Arc<dyn BookService>,
}

impl Services {
    /// Wire every service over one shared Unit of Work
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            seller_service: Arc::new(SellerManager::new(uow.clone())),
            book_service: Arc::new(BookManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn sellers(&self) -> Arc<dyn SellerService> {
        self.seller_service.clone()
    }

    fn books(&self) -> Arc<dyn BookService> {
        self.book_service.clone()
    }
}

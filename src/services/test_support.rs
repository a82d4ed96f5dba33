//! Hand-written `UnitOfWork` over mocked repositories.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};
use crate::infra::{
    BookRepository, MockBookRepository, MockSellerRepository, SellerRepository, TransactionContext,
    TxFuture, UnitOfWork,
};

pub(crate) struct StubUnitOfWork {
    sellers: Arc<MockSellerRepository>,
    books: Arc<MockBookRepository>,
}

impl StubUnitOfWork {
    pub(crate) fn new(sellers: MockSellerRepository, books: MockBookRepository) -> Self {
        Self {
            sellers: Arc::new(sellers),
            books: Arc::new(books),
        }
    }
}

#[async_trait]
impl UnitOfWork for StubUnitOfWork {
    fn sellers(&self) -> Arc<dyn SellerRepository> {
        self.sellers.clone()
    }

    fn books(&self) -> Arc<dyn BookRepository> {
        self.books.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        // Transactions need a live connection; covered by the SQLite API tests
        Err(AppError::internal("Transactions not supported in test stub"))
    }
}

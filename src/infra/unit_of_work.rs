//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and scopes multi-step writes to a single
//! database transaction: committed when the closure succeeds, rolled back
//! when it returns an error.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::repositories::{
    book_queries, seller_queries, BookRepository, BookStore, SellerRepository, SellerStore,
};
use crate::domain::{Book, BookDraft, Seller};
use crate::errors::AppResult;

/// Future returned by a transaction body, borrowing the transaction for `'a`.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly because of the generic `transaction` method;
/// tests implement it by hand around mocked repositories.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get seller repository
    fn sellers(&self) -> Arc<dyn SellerRepository>;

    /// Get book repository
    fn books(&self) -> Arc<dyn BookRepository>;

    /// Execute a closure within a transaction.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Repository access bound to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn sellers(&self) -> TxSellerRepository<'_> {
        TxSellerRepository { txn: self.txn }
    }

    pub fn books(&self) -> TxBookRepository<'_> {
        TxBookRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    seller_repo: Arc<SellerStore>,
    book_repo: Arc<BookStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        let seller_repo = Arc::new(SellerStore::new(db.clone()));
        let book_repo = Arc::new(BookStore::new(db.clone()));
        Self {
            db,
            seller_repo,
            book_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn sellers(&self) -> Arc<dyn SellerRepository> {
        self.seller_repo.clone()
    }

    fn books(&self) -> Arc<dyn BookRepository> {
        self.book_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self.db.begin().await?;

        let outcome = f(TransactionContext::new(&txn)).await;

        match outcome {
            Ok(result) => {
                txn.commit().await?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-scoped seller reads and writes.
pub struct TxSellerRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxSellerRepository<'_> {
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Seller>> {
        seller_queries::find_by_id(self.txn, id).await
    }

    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

/// Transaction-scoped book writes.
pub struct TxBookRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxBookRepository<'_> {
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        book_queries::find_by_id(self.txn, id).await
    }

    pub async fn create(&self, draft: BookDraft) -> AppResult<Book> {
        book_queries::create(self.txn, draft).await
    }

    pub async fn update(&self, id: i32, draft: BookDraft) -> AppResult<Book> {
        book_queries::update(self.txn, id, draft).await
    }
}

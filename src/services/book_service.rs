//! Book service - Book use cases.
//!
//! Writes that carry a `seller_id` check the seller inside the same
//! transaction as the insert/update, so a book can never be written
//! against a seller that does not exist.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Book, BookDraft};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Book service trait for dependency injection.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Create a book owned by an existing seller
    async fn create_book(&self, draft: BookDraft) -> AppResult<Book>;

    /// List all books
    async fn list_books(&self) -> AppResult<Vec<Book>>;

    /// Get book by ID
    async fn get_book(&self, id: i32) -> AppResult<Book>;

    /// Replace every field of a book
    async fn update_book(&self, id: i32, draft: BookDraft) -> AppResult<Book>;

    /// Delete book
    async fn delete_book(&self, id: i32) -> AppResult<()>;
}

fn unknown_seller(seller_id: i32) -> AppError {
    AppError::validation(format!("Seller {} does not exist", seller_id))
}

/// Concrete implementation of BookService using Unit of Work.
pub struct BookManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BookManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> BookService for BookManager<U> {
    async fn create_book(&self, draft: BookDraft) -> AppResult<Book> {
        let book = self
            .uow
            .transaction::<_, Book>(move |ctx| {
                Box::pin(async move {
                    if !ctx.sellers().exists(draft.seller_id).await? {
                        return Err(unknown_seller(draft.seller_id));
                    }
                    ctx.books().create(draft).await
                })
            })
            .await?;

        tracing::info!(
            book_id = book.id,
            seller_id = book.seller_id,
            "Book created"
        );
        Ok(book)
    }

    async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.uow.books().list().await
    }

    async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.uow.books().find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_book(&self, id: i32, draft: BookDraft) -> AppResult<Book> {
        let book = self
            .uow
            .transaction::<_, Book>(move |ctx| {
                Box::pin(async move {
                    ctx.books().find_by_id(id).await?.ok_or_not_found()?;
                    if !ctx.sellers().exists(draft.seller_id).await? {
                        return Err(unknown_seller(draft.seller_id));
                    }
                    ctx.books().update(id, draft).await
                })
            })
            .await?;

        tracing::info!(book_id = book.id, "Book updated");
        Ok(book)
    }

    async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.uow.books().delete(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use tokio_test::assert_ok;

    use super::*;
    use crate::infra::{MockBookRepository, MockSellerRepository};
    use crate::services::test_support::StubUnitOfWork;

    fn book(id: i32) -> Book {
        Book {
            id,
            title: "Eugeny Onegin".to_string(),
            author: "Pushkin".to_string(),
            year: 2021,
            pages: 231,
            seller_id: 1,
        }
    }

    fn manager(books: MockBookRepository) -> BookManager<StubUnitOfWork> {
        BookManager::new(Arc::new(StubUnitOfWork::new(
            MockSellerRepository::new(),
            books,
        )))
    }

    #[tokio::test]
    async fn test_get_book_success() {
        let mut books = MockBookRepository::new();
        books
            .expect_find_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(book(id))));

        let found = assert_ok!(manager(books).get_book(7).await);
        assert_eq!(found.id, 7);
        assert_eq!(found.seller_id, 1);
    }

    #[tokio::test]
    async fn test_get_book_not_found() {
        let mut books = MockBookRepository::new();
        books.expect_find_by_id().returning(|_| Ok(None));

        let result = manager(books).get_book(8).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_books() {
        let mut books = MockBookRepository::new();
        books
            .expect_list()
            .returning(|| Ok(vec![book(1), book(2)]));

        let listed = assert_ok!(manager(books).list_books().await);
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_book() {
        let mut books = MockBookRepository::new();
        books
            .expect_delete()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(()));

        assert_ok!(manager(books).delete_book(3).await);
    }

    #[tokio::test]
    async fn test_delete_missing_book() {
        let mut books = MockBookRepository::new();
        books
            .expect_delete()
            .returning(|_| Err(AppError::NotFound));

        let result = manager(books).delete_book(3).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[test]
    fn test_unknown_seller_is_validation_error() {
        assert!(matches!(unknown_seller(52), AppError::Validation(msg) if msg.contains("52")));
    }
}

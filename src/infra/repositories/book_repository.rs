//! Book repository implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::{Book, BookDraft};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Book repository trait for dependency injection.
///
/// Seller existence is not checked here; callers that write a `seller_id`
/// do so inside a unit-of-work transaction.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find book by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// List all books in storage order
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// List books owned by one seller
    async fn list_by_seller(&self, seller_id: i32) -> AppResult<Vec<Book>>;

    /// Insert a new book
    async fn create(&self, draft: BookDraft) -> AppResult<Book>;

    /// Replace every field of an existing book
    async fn update(&self, id: i32, draft: BookDraft) -> AppResult<Book>;

    /// Remove the book. Fails with `NotFound` for an unknown id.
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of BookRepository
pub struct BookStore {
    db: DatabaseConnection,
}

impl BookStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for BookStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        queries::find_by_id(&self.db, id).await
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        queries::list(&self.db).await
    }

    async fn list_by_seller(&self, seller_id: i32) -> AppResult<Vec<Book>> {
        queries::list_by_seller(&self.db, seller_id).await
    }

    async fn create(&self, draft: BookDraft) -> AppResult<Book> {
        queries::create(&self.db, draft).await
    }

    async fn update(&self, id: i32, draft: BookDraft) -> AppResult<Book> {
        queries::update(&self.db, id, draft).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        queries::delete(&self.db, id).await
    }
}

pub(crate) mod queries {
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter,
        QueryOrder, Set,
    };

    use super::super::entities::book::{self, ActiveModel, Entity as BookEntity};
    use crate::domain::{Book, BookDraft};
    use crate::errors::{AppError, AppResult, OptionExt};

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Book>> {
        let result = BookEntity::find_by_id(id).one(db).await?;
        Ok(result.map(Book::from))
    }

    pub async fn list<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Book>> {
        let models = BookEntity::find()
            .order_by_asc(book::Column::Id)
            .all(db)
            .await?;

        Ok(models.into_iter().map(Book::from).collect())
    }

    pub async fn list_by_seller<C: ConnectionTrait>(
        db: &C,
        seller_id: i32,
    ) -> AppResult<Vec<Book>> {
        let models = BookEntity::find()
            .filter(book::Column::SellerId.eq(seller_id))
            .order_by_asc(book::Column::Id)
            .all(db)
            .await?;

        Ok(models.into_iter().map(Book::from).collect())
    }

    pub async fn create<C: ConnectionTrait>(db: &C, draft: BookDraft) -> AppResult<Book> {
        let active_model = ActiveModel {
            id: NotSet,
            title: Set(draft.title),
            author: Set(draft.author),
            year: Set(draft.year),
            pages: Set(draft.pages),
            seller_id: Set(draft.seller_id),
        };

        let model = active_model.insert(db).await?;
        Ok(Book::from(model))
    }

    pub async fn update<C: ConnectionTrait>(db: &C, id: i32, draft: BookDraft) -> AppResult<Book> {
        let book = BookEntity::find_by_id(id).one(db).await?.ok_or_not_found()?;

        let mut active: ActiveModel = book.into();
        active.title = Set(draft.title);
        active.author = Set(draft.author);
        active.year = Set(draft.year);
        active.pages = Set(draft.pages);
        active.seller_id = Set(draft.seller_id);

        let model = active.update(db).await?;
        Ok(Book::from(model))
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
        let result = BookEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

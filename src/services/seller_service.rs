//! Seller service - Seller use cases.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{CreateSeller, NewSeller, Password, Seller, SellerChanges, SellerWithBooks};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Seller service trait for dependency injection.
#[async_trait]
pub trait SellerService: Send + Sync {
    /// Hash the credential and persist a new seller
    async fn create_seller(&self, input: CreateSeller) -> AppResult<Seller>;

    /// List all sellers
    async fn list_sellers(&self) -> AppResult<Vec<Seller>>;

    /// Get a seller together with the books it owns
    async fn get_seller_with_books(&self, id: i32) -> AppResult<SellerWithBooks>;

    /// Overwrite names and email
    async fn update_seller(&self, id: i32, changes: SellerChanges) -> AppResult<Seller>;

    /// Delete seller
    async fn delete_seller(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of SellerService using Unit of Work.
pub struct SellerManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> SellerManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> SellerService for SellerManager<U> {
    async fn create_seller(&self, input: CreateSeller) -> AppResult<Seller> {
        let CreateSeller {
            first_name,
            last_name,
            email,
            password,
        } = input;

        // Argon2 is CPU bound; keep it off the async workers
        let password_hash = tokio::task::spawn_blocking(move || Password::new(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))??
            .into_string();

        let seller = self
            .uow
            .sellers()
            .create(NewSeller {
                first_name,
                last_name,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(seller_id = seller.id, "Seller created");
        Ok(seller)
    }

    async fn list_sellers(&self) -> AppResult<Vec<Seller>> {
        self.uow.sellers().list().await
    }

    async fn get_seller_with_books(&self, id: i32) -> AppResult<SellerWithBooks> {
        let seller = self.uow.sellers().find_by_id(id).await?.ok_or_not_found()?;
        let books = self.uow.books().list_by_seller(seller.id).await?;

        Ok(SellerWithBooks { seller, books })
    }

    async fn update_seller(&self, id: i32, changes: SellerChanges) -> AppResult<Seller> {
        let seller = self.uow.sellers().update(id, changes).await?;
        tracing::info!(seller_id = seller.id, "Seller updated");
        Ok(seller)
    }

    async fn delete_seller(&self, id: i32) -> AppResult<()> {
        self.uow.sellers().delete(id).await?;
        tracing::info!(seller_id = id, "Seller deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::domain::Book;
    use crate::infra::{MockBookRepository, MockSellerRepository};
    use crate::services::test_support::StubUnitOfWork;

    fn seller(id: i32) -> Seller {
        Seller {
            id,
            first_name: "Rustam".to_string(),
            last_name: "Aminov".to_string(),
            email: "ru123@mail.com".to_string(),
            password_hash: "hashed".to_string(),
        }
    }

    fn book(id: i32, seller_id: i32) -> Book {
        Book {
            id,
            title: "Mtziri".to_string(),
            author: "Lermontov".to_string(),
            year: 2024,
            pages: 510,
            seller_id,
        }
    }

    fn manager(
        sellers: MockSellerRepository,
        books: MockBookRepository,
    ) -> SellerManager<StubUnitOfWork> {
        SellerManager::new(Arc::new(StubUnitOfWork::new(sellers, books)))
    }

    #[tokio::test]
    async fn test_create_seller_hashes_password() {
        let mut sellers = MockSellerRepository::new();
        sellers
            .expect_create()
            .withf(|new| {
                new.email == "ru123@mail.com"
                    && new.password_hash != "kskfls"
                    && Password::from_hash(new.password_hash.clone()).verify("kskfls")
            })
            .times(1)
            .returning(|new| {
                Ok(Seller {
                    id: 1,
                    first_name: new.first_name,
                    last_name: new.last_name,
                    email: new.email,
                    password_hash: new.password_hash,
                })
            });

        let service = manager(sellers, MockBookRepository::new());
        let created = service
            .create_seller(CreateSeller {
                first_name: "Rustam".to_string(),
                last_name: "Aminov".to_string(),
                email: "ru123@mail.com".to_string(),
                password: "kskfls".to_string(),
            })
            .await;

        let created = assert_ok!(created);
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_create_seller_with_empty_password_never_hits_storage() {
        let mut sellers = MockSellerRepository::new();
        sellers.expect_create().never();

        let service = manager(sellers, MockBookRepository::new());
        let result = service
            .create_seller(CreateSeller {
                first_name: "Rustam".to_string(),
                last_name: "Aminov".to_string(),
                email: "ru123@mail.com".to_string(),
                password: String::new(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_seller_with_books() {
        let mut sellers = MockSellerRepository::new();
        sellers
            .expect_find_by_id()
            .with(eq(5))
            .returning(|id| Ok(Some(seller(id))));

        let mut books = MockBookRepository::new();
        books
            .expect_list_by_seller()
            .with(eq(5))
            .returning(|seller_id| Ok(vec![book(1, seller_id), book(2, seller_id)]));

        let service = manager(sellers, books);
        let result = assert_ok!(service.get_seller_with_books(5).await);

        assert_eq!(result.seller.id, 5);
        assert_eq!(result.books.len(), 2);
    }

    #[tokio::test]
    async fn test_get_missing_seller_skips_book_lookup() {
        let mut sellers = MockSellerRepository::new();
        sellers.expect_find_by_id().returning(|_| Ok(None));

        let mut books = MockBookRepository::new();
        books.expect_list_by_seller().never();

        let service = manager(sellers, books);
        let result = service.get_seller_with_books(42).await;

        assert!(matches!(assert_err!(result), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_update_seller_passes_changes_through() {
        let changes = SellerChanges {
            first_name: "Anton".to_string(),
            last_name: "Vasilyev".to_string(),
            email: "ru123@blabla.ru".to_string(),
        };

        let mut sellers = MockSellerRepository::new();
        sellers
            .expect_update()
            .with(eq(3), eq(changes.clone()))
            .returning(|id, changes| {
                Ok(Seller {
                    id,
                    first_name: changes.first_name,
                    last_name: changes.last_name,
                    email: changes.email,
                    password_hash: "hashed".to_string(),
                })
            });

        let service = manager(sellers, MockBookRepository::new());
        let updated = assert_ok!(service.update_seller(3, changes).await);

        assert_eq!(updated.first_name, "Anton");
        assert_eq!(updated.password_hash, "hashed");
    }

    #[tokio::test]
    async fn test_delete_missing_seller() {
        let mut sellers = MockSellerRepository::new();
        sellers
            .expect_delete()
            .returning(|_| Err(AppError::NotFound));

        let service = manager(sellers, MockBookRepository::new());
        let result = service.delete_seller(99).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_sellers() {
        let mut sellers = MockSellerRepository::new();
        sellers
            .expect_list()
            .returning(|| Ok(vec![seller(1), seller(2)]));

        let service = manager(sellers, MockBookRepository::new());
        let listed = assert_ok!(service.list_sellers().await);

        assert_eq!(listed.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
    }
}

//! Seller repository implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::{NewSeller, Seller, SellerChanges};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Seller repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SellerRepository: Send + Sync {
    /// Find seller by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Seller>>;

    /// List all sellers in storage order
    async fn list(&self) -> AppResult<Vec<Seller>>;

    /// Insert a new seller
    async fn create(&self, seller: NewSeller) -> AppResult<Seller>;

    /// Overwrite names and email. Fails with `NotFound` for an unknown id.
    async fn update(&self, id: i32, changes: SellerChanges) -> AppResult<Seller>;

    /// Remove the seller. Fails with `NotFound` for an unknown id.
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of SellerRepository
pub struct SellerStore {
    db: DatabaseConnection,
}

impl SellerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SellerRepository for SellerStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Seller>> {
        queries::find_by_id(&self.db, id).await
    }

    async fn list(&self) -> AppResult<Vec<Seller>> {
        queries::list(&self.db).await
    }

    async fn create(&self, seller: NewSeller) -> AppResult<Seller> {
        queries::create(&self.db, seller).await
    }

    async fn update(&self, id: i32, changes: SellerChanges) -> AppResult<Seller> {
        queries::update(&self.db, id, changes).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        queries::delete(&self.db, id).await
    }
}

/// Queries shared by the pooled store and the transaction-scoped repository.
pub(crate) mod queries {
    use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};

    use super::super::entities::seller::{self, ActiveModel, Entity as SellerEntity};
    use crate::domain::{NewSeller, Seller, SellerChanges};
    use crate::errors::{AppError, AppResult, OptionExt};

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Seller>> {
        let result = SellerEntity::find_by_id(id).one(db).await?;
        Ok(result.map(Seller::from))
    }

    pub async fn list<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Seller>> {
        let models = SellerEntity::find()
            .order_by_asc(seller::Column::Id)
            .all(db)
            .await?;

        Ok(models.into_iter().map(Seller::from).collect())
    }

    pub async fn create<C: ConnectionTrait>(db: &C, seller: NewSeller) -> AppResult<Seller> {
        let active_model = ActiveModel {
            id: NotSet,
            first_name: Set(seller.first_name),
            last_name: Set(seller.last_name),
            email: Set(seller.email),
            password_hash: Set(seller.password_hash),
        };

        let model = active_model.insert(db).await?;
        Ok(Seller::from(model))
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i32,
        changes: SellerChanges,
    ) -> AppResult<Seller> {
        let seller = SellerEntity::find_by_id(id).one(db).await?.ok_or_not_found()?;

        let mut active: ActiveModel = seller.into();
        active.first_name = Set(changes.first_name);
        active.last_name = Set(changes.last_name);
        active.email = Set(changes.email);

        let model = active.update(db).await?;
        Ok(Seller::from(model))
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
        let result = SellerEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

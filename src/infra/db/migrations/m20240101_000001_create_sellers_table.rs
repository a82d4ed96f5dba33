//! Migration: Create sellers table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sellers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sellers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sellers::FirstName).string().not_null())
                    .col(ColumnDef::new(Sellers::LastName).string().not_null())
                    .col(ColumnDef::new(Sellers::Email).string().not_null())
                    .col(ColumnDef::new(Sellers::PasswordHash).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sellers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Sellers {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PasswordHash,
}

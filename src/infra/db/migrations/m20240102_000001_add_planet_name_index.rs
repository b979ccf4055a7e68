//! Migration: Index planet names for exact-name lookups.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_planets_name")
                    .table(Planets::Table)
                    .col(Planets::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_planets_name")
                    .table(Planets::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Planets {
    Table,
    Name,
}

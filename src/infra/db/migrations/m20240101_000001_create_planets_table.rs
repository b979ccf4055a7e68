//! Migration: Create planets table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Planets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Planets::Name).string().not_null())
                    .col(ColumnDef::new(Planets::Climate).string().not_null())
                    .col(ColumnDef::new(Planets::Terrain).string().not_null())
                    .col(
                        ColumnDef::new(Planets::FilmsAppearedIn)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Planets {
    Table,
    Id,
    Name,
    Climate,
    Terrain,
    FilmsAppearedIn,
}

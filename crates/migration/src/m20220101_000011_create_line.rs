//! Create `line` table.
//! `id` is an auto-increment key so deleted ids are never handed out again.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Line::Table)
                    .if_not_exists()
                    .col(big_integer(Line::Id).primary_key().auto_increment())
                    .col(string_len(Line::Name, 255).not_null())
                    .col(string_len(Line::Color, 64).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Line::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Line { Table, Id, Name, Color }

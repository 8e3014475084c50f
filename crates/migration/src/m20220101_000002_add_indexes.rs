use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Line: lookup by name (not unique, duplicate names are allowed)
        manager
            .create_index(
                Index::create()
                    .name("idx_line_name")
                    .table(Line::Table)
                    .col(Line::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_line_name").table(Line::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Line { Table, Name }

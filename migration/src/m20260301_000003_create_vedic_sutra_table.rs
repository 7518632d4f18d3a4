use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VedicSutra::Table)
                    .if_not_exists()
                    .col(pk_auto(VedicSutra::Id))
                    .col(string_len_uniq(VedicSutra::Name, 200))
                    .col(string_len_null(VedicSutra::SanskritName, 200))
                    .col(string_len_null(VedicSutra::EnglishTranslation, 300))
                    .col(text_null(VedicSutra::Description))
                    .col(text_null(VedicSutra::Applications))
                    .col(integer(VedicSutra::OrderIndex))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VedicSutra::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VedicSutra {
    Table,
    Id,
    Name,
    SanskritName,
    EnglishTranslation,
    Description,
    Applications,
    OrderIndex,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Achievement::Table)
                    .if_not_exists()
                    .col(pk_auto(Achievement::Id))
                    .col(string_len(Achievement::Name, 100))
                    .col(text_null(Achievement::Description))
                    .col(string_len_null(Achievement::Icon, 100))
                    .col(string_len_null(Achievement::BadgeImage, 500))
                    .col(integer(Achievement::XpReward).default(100))
                    .col(text_null(Achievement::Criteria))
                    .col(string_len_null(Achievement::Category, 50))
                    .col(string_len(Achievement::Rarity, 20).default("common"))
                    .col(boolean(Achievement::IsHidden).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Achievement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Achievement {
    Table,
    Id,
    Name,
    Description,
    Icon,
    BadgeImage,
    XpReward,
    Criteria,
    Category,
    Rarity,
    IsHidden,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Unit::Table)
                    .if_not_exists()
                    .col(pk_auto(Unit::Id))
                    .col(string_len(Unit::Title, 200))
                    .col(text_null(Unit::Description))
                    .col(integer(Unit::OrderIndex))
                    .col(string_len_null(Unit::Icon, 100))
                    .col(string_len_null(Unit::ColorTheme, 50))
                    .col(integer_null(Unit::EstimatedDuration))
                    .col(string_len(Unit::Difficulty, 20).default("beginner"))
                    .col(timestamp_with_time_zone(Unit::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Unit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Unit {
    Table,
    Id,
    Title,
    Description,
    OrderIndex,
    Icon,
    ColorTheme,
    EstimatedDuration,
    Difficulty,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_unit_table::Unit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lesson::Table)
                    .if_not_exists()
                    .col(pk_auto(Lesson::Id))
                    .col(integer_null(Lesson::UnitId))
                    .col(string_len(Lesson::Title, 200))
                    .col(text_null(Lesson::Description))
                    .col(json(Lesson::ContentJson))
                    .col(string_len(Lesson::Difficulty, 20))
                    .col(integer(Lesson::OrderIndex))
                    .col(integer(Lesson::XpReward).default(50))
                    .col(integer_null(Lesson::EstimatedTime))
                    .col(json_null(Lesson::LearningObjectives))
                    .col(json_null(Lesson::Prerequisites))
                    .col(json_null(Lesson::VedicSutras))
                    .col(string_len_null(Lesson::ThumbnailImage, 500))
                    .col(timestamp_with_time_zone(Lesson::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Lesson::UpdatedAt).default(Expr::current_timestamp()))
                    .col(boolean(Lesson::IsPublished).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_unit_id")
                            .from(Lesson::Table, Lesson::UnitId)
                            .to(Unit::Table, Unit::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lesson::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lesson {
    Table,
    Id,
    UnitId,
    Title,
    Description,
    ContentJson,
    Difficulty,
    OrderIndex,
    XpReward,
    EstimatedTime,
    LearningObjectives,
    Prerequisites,
    VedicSutras,
    ThumbnailImage,
    CreatedAt,
    UpdatedAt,
    IsPublished,
}

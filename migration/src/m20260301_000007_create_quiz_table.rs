use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000004_create_lesson_table::Lesson;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quiz::Table)
                    .if_not_exists()
                    .col(pk_auto(Quiz::Id))
                    .col(integer_null(Quiz::LessonId))
                    .col(string_len(Quiz::Title, 200))
                    .col(text_null(Quiz::Description))
                    .col(integer(Quiz::TimeLimit).default(10))
                    .col(integer(Quiz::MaxAttempts).default(3))
                    .col(integer(Quiz::PassingScore).default(70))
                    .col(integer(Quiz::XpReward).default(100))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_lesson_id")
                            .from(Quiz::Table, Quiz::LessonId)
                            .to(Lesson::Table, Lesson::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quiz::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Quiz {
    Table,
    Id,
    LessonId,
    Title,
    Description,
    TimeLimit,
    MaxAttempts,
    PassingScore,
    XpReward,
}

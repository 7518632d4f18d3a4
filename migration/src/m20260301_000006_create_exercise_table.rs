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
                    .table(Exercise::Table)
                    .if_not_exists()
                    .col(pk_auto(Exercise::Id))
                    .col(integer_null(Exercise::LessonId))
                    .col(text(Exercise::Question))
                    .col(string_len(Exercise::CorrectAnswer, 200))
                    .col(text_null(Exercise::Explanation))
                    .col(string_len(Exercise::Difficulty, 20).default("beginner"))
                    .col(integer(Exercise::XpReward).default(10))
                    .col(string_len(Exercise::QuestionType, 50).default("multiple_choice"))
                    .col(text_null(Exercise::Options))
                    .col(text_null(Exercise::Hints))
                    .col(text_null(Exercise::StepByStepSolution))
                    .col(integer_null(Exercise::TimeLimit))
                    .col(text_null(Exercise::Tags))
                    .col(timestamp_with_time_zone(Exercise::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exercise_lesson_id")
                            .from(Exercise::Table, Exercise::LessonId)
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
            .drop_table(Table::drop().table(Exercise::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Exercise {
    Table,
    Id,
    LessonId,
    Question,
    CorrectAnswer,
    Explanation,
    Difficulty,
    XpReward,
    QuestionType,
    Options,
    Hints,
    StepByStepSolution,
    TimeLimit,
    Tags,
    CreatedAt,
}

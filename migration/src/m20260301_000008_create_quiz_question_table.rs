use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000007_create_quiz_table::Quiz;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuizQuestion::Table)
                    .if_not_exists()
                    .col(pk_auto(QuizQuestion::Id))
                    .col(integer(QuizQuestion::QuizId))
                    .col(text(QuizQuestion::Question))
                    .col(string_len(QuizQuestion::QuestionType, 50).default("multiple_choice"))
                    .col(text_null(QuizQuestion::Options))
                    .col(string_len(QuizQuestion::CorrectAnswer, 200))
                    .col(text_null(QuizQuestion::Explanation))
                    .col(integer(QuizQuestion::Points).default(10))
                    .col(integer(QuizQuestion::OrderIndex).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_question_quiz_id")
                            .from(QuizQuestion::Table, QuizQuestion::QuizId)
                            .to(Quiz::Table, Quiz::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuizQuestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum QuizQuestion {
    Table,
    Id,
    QuizId,
    Question,
    QuestionType,
    Options,
    CorrectAnswer,
    Explanation,
    Points,
    OrderIndex,
}

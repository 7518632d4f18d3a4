use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DailyChallenge::Table)
                    .if_not_exists()
                    .col(pk_auto(DailyChallenge::Id))
                    .col(date(DailyChallenge::ChallengeDate).unique_key())
                    .col(string_len(DailyChallenge::Title, 200))
                    .col(text_null(DailyChallenge::Description))
                    .col(text(DailyChallenge::Question))
                    .col(string_len(DailyChallenge::CorrectAnswer, 200))
                    .col(text_null(DailyChallenge::Explanation))
                    .col(string_len(DailyChallenge::Difficulty, 20).default("beginner"))
                    .col(integer(DailyChallenge::XpReward).default(50))
                    .col(integer(DailyChallenge::TimeLimit).default(300))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyChallenge::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DailyChallenge {
    Table,
    Id,
    ChallengeDate,
    Title,
    Description,
    Question,
    CorrectAnswer,
    Explanation,
    Difficulty,
    XpReward,
    TimeLimit,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User,
    m20260301_000014_create_daily_challenge_table::DailyChallenge,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChallengeAttempt::Table)
                    .if_not_exists()
                    .col(pk_auto(ChallengeAttempt::Id))
                    .col(integer(ChallengeAttempt::UserId))
                    .col(integer(ChallengeAttempt::ChallengeId))
                    .col(string_len_null(ChallengeAttempt::UserAnswer, 200))
                    .col(boolean(ChallengeAttempt::IsCorrect))
                    .col(integer_null(ChallengeAttempt::TimeTaken))
                    .col(timestamp_with_time_zone(ChallengeAttempt::AttemptedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_challenge_attempt_user_id")
                            .from(ChallengeAttempt::Table, ChallengeAttempt::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_challenge_attempt_challenge_id")
                            .from(ChallengeAttempt::Table, ChallengeAttempt::ChallengeId)
                            .to(DailyChallenge::Table, DailyChallenge::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_challenge_attempt_unique")
                            .col(ChallengeAttempt::UserId)
                            .col(ChallengeAttempt::ChallengeId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChallengeAttempt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChallengeAttempt {
    Table,
    Id,
    UserId,
    ChallengeId,
    UserAnswer,
    IsCorrect,
    TimeTaken,
    AttemptedAt,
}

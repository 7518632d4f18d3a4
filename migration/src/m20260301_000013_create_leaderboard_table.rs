use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leaderboard::Table)
                    .if_not_exists()
                    .col(pk_auto(Leaderboard::Id))
                    .col(integer(Leaderboard::UserId))
                    .col(string_len(Leaderboard::Period, 20))
                    .col(integer(Leaderboard::XpEarned).default(0))
                    .col(integer(Leaderboard::LessonsCompleted).default(0))
                    .col(integer(Leaderboard::StreakCount).default(0))
                    .col(integer_null(Leaderboard::Rank))
                    .col(date(Leaderboard::PeriodStart))
                    .col(date(Leaderboard::PeriodEnd))
                    .col(timestamp_with_time_zone(Leaderboard::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leaderboard_user_id")
                            .from(Leaderboard::Table, Leaderboard::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Leaderboard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Leaderboard {
    Table,
    Id,
    UserId,
    Period,
    XpEarned,
    LessonsCompleted,
    StreakCount,
    Rank,
    PeriodStart,
    PeriodEnd,
    UpdatedAt,
}

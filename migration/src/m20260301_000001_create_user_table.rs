use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len_uniq(User::Username, 80))
                    .col(string_len_null(User::Email, 120).unique_key())
                    .col(string(User::PasswordHash))
                    .col(date(User::DateOfBirth))
                    .col(string_len(User::GradeQualification, 50))
                    .col(string_len(User::Role, 20).default("learner"))
                    .col(timestamp_with_time_zone(User::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone_null(User::LastLogin))
                    .col(boolean(User::IsActive).default(true))
                    .col(integer(User::TotalXp).default(0))
                    .col(integer(User::CurrentLevel).default(1))
                    .col(integer(User::DailyStreak).default(0))
                    .col(integer(User::LongestStreak).default(0))
                    .col(date_null(User::LastActivityDate))
                    .col(integer(User::PointsToday).default(0))
                    .col(integer(User::TotalLessonsCompleted).default(0))
                    .col(integer(User::TotalExercisesCompleted).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    DateOfBirth,
    GradeQualification,
    Role,
    CreatedAt,
    LastLogin,
    IsActive,
    TotalXp,
    CurrentLevel,
    DailyStreak,
    LongestStreak,
    LastActivityDate,
    PointsToday,
    TotalLessonsCompleted,
    TotalExercisesCompleted,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000004_create_lesson_table::Lesson,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProgress::Table)
                    .if_not_exists()
                    .col(pk_auto(UserProgress::Id))
                    .col(integer(UserProgress::UserId))
                    .col(integer_null(UserProgress::LessonId))
                    .col(boolean(UserProgress::Completed).default(false))
                    .col(timestamp_with_time_zone_null(UserProgress::CompletionDate))
                    .col(integer_null(UserProgress::Score))
                    .col(integer_null(UserProgress::TimeSpent))
                    .col(integer(UserProgress::Attempts).default(0))
                    .col(text_null(UserProgress::ContentSectionsViewed))
                    .col(integer(UserProgress::ExercisesCompleted).default(0))
                    .col(integer(UserProgress::ExercisesCorrect).default(0))
                    .col(timestamp_with_time_zone(UserProgress::LastAccessed).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_progress_user_id")
                            .from(UserProgress::Table, UserProgress::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_progress_lesson_id")
                            .from(UserProgress::Table, UserProgress::LessonId)
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
            .drop_table(Table::drop().table(UserProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserProgress {
    Table,
    Id,
    UserId,
    LessonId,
    Completed,
    CompletionDate,
    Score,
    TimeSpent,
    Attempts,
    ContentSectionsViewed,
    ExercisesCompleted,
    ExercisesCorrect,
    LastAccessed,
}

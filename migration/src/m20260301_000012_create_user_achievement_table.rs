use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User,
    m20260301_000011_create_achievement_table::Achievement,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAchievement::Table)
                    .if_not_exists()
                    .col(pk_auto(UserAchievement::Id))
                    .col(integer(UserAchievement::UserId))
                    .col(integer(UserAchievement::AchievementId))
                    .col(timestamp_with_time_zone(UserAchievement::EarnedDate).default(Expr::current_timestamp()))
                    .col(boolean(UserAchievement::IsNew).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_achievement_user_id")
                            .from(UserAchievement::Table, UserAchievement::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_achievement_achievement_id")
                            .from(UserAchievement::Table, UserAchievement::AchievementId)
                            .to(Achievement::Table, Achievement::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_user_achievement_unique")
                            .col(UserAchievement::UserId)
                            .col(UserAchievement::AchievementId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAchievement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserAchievement {
    Table,
    Id,
    UserId,
    AchievementId,
    EarnedDate,
    IsNew,
}

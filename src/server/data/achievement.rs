//! Achievement data repository.
//!
//! Reads the achievement catalogue and manages the `user_achievement` rows that record
//! which user earned what and whether they have seen the notification.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::achievement::{Achievement, EarnedAchievement};

pub struct AchievementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AchievementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the whole catalogue ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Achievement>, DbErr> {
        let entities = entity::prelude::Achievement::find()
            .order_by_asc(entity::achievement::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Achievement::from_entity).collect())
    }

    /// Gets the IDs of achievements a user has already earned
    pub async fn earned_ids(&self, user_id: i32) -> Result<HashSet<i32>, DbErr> {
        let ids: Vec<i32> = entity::prelude::UserAchievement::find()
            .select_only()
            .column(entity::user_achievement::Column::AchievementId)
            .filter(entity::user_achievement::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Gets the achievements a user has earned, oldest first
    pub async fn get_earned(&self, user_id: i32) -> Result<Vec<EarnedAchievement>, DbErr> {
        self.find_earned(user_id, false).await
    }

    /// Gets earned achievements the user has not been notified about yet
    pub async fn get_unread(&self, user_id: i32) -> Result<Vec<EarnedAchievement>, DbErr> {
        self.find_earned(user_id, true).await
    }

    async fn find_earned(
        &self,
        user_id: i32,
        unread_only: bool,
    ) -> Result<Vec<EarnedAchievement>, DbErr> {
        let mut query = entity::prelude::UserAchievement::find()
            .filter(entity::user_achievement::Column::UserId.eq(user_id));
        if unread_only {
            query = query.filter(entity::user_achievement::Column::IsNew.eq(true));
        }

        let rows = query
            .order_by_asc(entity::user_achievement::Column::EarnedDate)
            .order_by_asc(entity::user_achievement::Column::Id)
            .find_also_related(entity::prelude::Achievement)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(earned, achievement)| {
                achievement.map(|a| EarnedAchievement {
                    id: earned.id,
                    achievement: Achievement::from_entity(a),
                    earned_date: earned.earned_date,
                    is_new: earned.is_new,
                })
            })
            .collect())
    }

    /// Records that a user earned an achievement, flagged as unread
    pub async fn award(
        &self,
        user_id: i32,
        achievement_id: i32,
        earned_date: DateTime<Utc>,
    ) -> Result<i32, DbErr> {
        let entity = entity::user_achievement::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            achievement_id: ActiveValue::Set(achievement_id),
            earned_date: ActiveValue::Set(earned_date),
            is_new: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Marks all of a user's unread achievements as seen, returning how many changed
    pub async fn mark_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserAchievement::update_many()
            .col_expr(entity::user_achievement::Column::IsNew, Expr::value(false))
            .filter(entity::user_achievement::Column::UserId.eq(user_id))
            .filter(entity::user_achievement::Column::IsNew.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count_earned(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::UserAchievement::find()
            .filter(entity::user_achievement::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }
}

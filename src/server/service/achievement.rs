use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::achievement::AchievementRepository,
    error::AppError,
    model::achievement::{Achievement, EarnedAchievement},
};

pub struct AchievementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AchievementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the catalogue as seen by a learner, paired with when each one was earned.
    ///
    /// Hidden achievements only appear once earned.
    pub async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(Achievement, Option<DateTime<Utc>>)>, AppError> {
        let repo = AchievementRepository::new(self.db);

        let earned: HashMap<i32, DateTime<Utc>> = repo
            .get_earned(user_id)
            .await?
            .into_iter()
            .map(|e| (e.achievement.id, e.earned_date))
            .collect();

        Ok(repo
            .get_all()
            .await?
            .into_iter()
            .filter_map(|a| {
                let earned_date = earned.get(&a.id).copied();
                if a.is_hidden && earned_date.is_none() {
                    return None;
                }
                Some((a, earned_date))
            })
            .collect())
    }

    /// Achievements earned but not yet seen.
    pub async fn notifications(&self, user_id: i32) -> Result<Vec<EarnedAchievement>, AppError> {
        Ok(AchievementRepository::new(self.db)
            .get_unread(user_id)
            .await?)
    }

    pub async fn mark_read(&self, user_id: i32) -> Result<u64, AppError> {
        let marked = AchievementRepository::new(self.db)
            .mark_read(user_id)
            .await?;

        tracing::debug!("Marked {} notifications read for user {}", marked, user_id);

        Ok(marked)
    }
}

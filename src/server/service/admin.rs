use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        challenge::ChallengeRepository, exercise::ExerciseRepository, lesson::LessonRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{stats::PlatformStats, user::User},
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    pub async fn user_profile(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Activates a deactivated account or deactivates an active one.
    ///
    /// # Returns
    /// - `Ok(User)` - Target account with its new status
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::BadRequest)` - Admin targeted their own account
    pub async fn toggle_status(&self, actor_id: i32, target_id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(target) = repo.find_by_id(target_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };
        if target.id == actor_id {
            return Err(AppError::BadRequest(
                "Cannot deactivate your own account".to_string(),
            ));
        }

        let user = repo
            .set_active(target.id, !target.is_active)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(
            "Admin {} set user {} active={}",
            actor_id,
            user.id,
            user.is_active
        );

        Ok(user)
    }

    /// Sets the role of another account from its wire name.
    ///
    /// The role name is checked before the target is looked up.
    pub async fn change_role(
        &self,
        actor_id: i32,
        target_id: i32,
        role: Option<&str>,
    ) -> Result<User, AppError> {
        let Some(role) = role.and_then(UserRole::parse) else {
            return Err(AppError::BadRequest("Invalid role".to_string()));
        };

        let repo = UserRepository::new(self.db);
        if repo.find_by_id(target_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if target_id == actor_id {
            return Err(AppError::BadRequest(
                "Cannot change your own role".to_string(),
            ));
        }

        let user = repo
            .set_role(target_id, role)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(
            "Admin {} changed role of user {} to {}",
            actor_id,
            user.id,
            role.as_str()
        );

        Ok(user)
    }

    /// Dashboard totals. A user counts as active today when they logged in since
    /// midnight UTC of `now`.
    pub async fn platform_stats(&self, now: DateTime<Utc>) -> Result<PlatformStats, AppError> {
        let user_repo = UserRepository::new(self.db);
        let midnight = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|t| t.and_utc())
            .unwrap_or(now);

        Ok(PlatformStats {
            total_users: user_repo.count().await?,
            total_lessons: LessonRepository::new(self.db).count().await?,
            total_questions: ExerciseRepository::new(self.db).count().await?,
            total_challenges: ChallengeRepository::new(self.db).count().await?,
            active_users_today: user_repo.count_logged_in_since(midnight).await?,
        })
    }
}

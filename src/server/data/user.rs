//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records: registration,
//! lookups used by login and the auth guard, admin account management, and persisting
//! gamification counters. Entity models are converted to domain models at this boundary.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    stats::LearnerStats,
    user::{CreateUserParam, UpdateProfileParam, User},
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a newly registered user with zeroed gamification counters.
    ///
    /// # Arguments
    /// - `param` - Validated registration data with the hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            date_of_birth: ActiveValue::Set(param.date_of_birth),
            grade_qualification: ActiveValue::Set(param.grade_qualification),
            role: ActiveValue::Set(param.role),
            created_at: ActiveValue::Set(Utc::now()),
            last_login: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            total_xp: ActiveValue::Set(0),
            current_level: ActiveValue::Set(1),
            daily_streak: ActiveValue::Set(0),
            longest_streak: ActiveValue::Set(0),
            last_activity_date: ActiveValue::Set(None),
            points_today: ActiveValue::Set(0),
            total_lessons_completed: ActiveValue::Set(0),
            total_exercises_completed: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets all users ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Sets the last login timestamp of a user.
    ///
    /// # Returns
    /// - `Ok(())` - Timestamp updated (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_last_login(&self, id: i32, at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::LastLogin, Expr::value(Some(at)))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Activates or deactivates a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = entity.into();
        active_model.is_active = ActiveValue::Set(is_active);
        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Changes the role of a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role(&self, id: i32, role: UserRole) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = entity.into();
        active_model.role = ActiveValue::Set(role);
        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Applies self-service profile changes.
    ///
    /// Fields left as `None` in `param` are not touched.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        id: i32,
        param: UpdateProfileParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = entity.into();
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(grade) = param.grade_qualification {
            active_model.grade_qualification = ActiveValue::Set(grade);
        }
        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Persists the XP, level, streak and completion counters of a user.
    pub async fn update_stats(&self, id: i32, stats: &LearnerStats) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::TotalXp, Expr::value(stats.total_xp))
            .col_expr(
                entity::user::Column::CurrentLevel,
                Expr::value(stats.current_level),
            )
            .col_expr(
                entity::user::Column::DailyStreak,
                Expr::value(stats.daily_streak),
            )
            .col_expr(
                entity::user::Column::LongestStreak,
                Expr::value(stats.longest_streak),
            )
            .col_expr(
                entity::user::Column::LastActivityDate,
                Expr::value(stats.last_activity_date),
            )
            .col_expr(
                entity::user::Column::PointsToday,
                Expr::value(stats.points_today),
            )
            .col_expr(
                entity::user::Column::TotalLessonsCompleted,
                Expr::value(stats.total_lessons_completed),
            )
            .col_expr(
                entity::user::Column::TotalExercisesCompleted,
                Expr::value(stats.total_exercises_completed),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts all registered users.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Counts users whose last login is at or after `since`.
    pub async fn count_logged_in_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::LastLogin.gte(since))
            .count(self.db)
            .await
    }
}

//! User factory for creating learner and admin accounts.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test users with customizable fields.
///
/// The default password hash is not a valid Argon2 hash. Tests that log in should
/// supply a real hash through `password_hash()`.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .username("arjun")
///     .role(UserRole::Admin)
///     .total_xp(750)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: Option<String>,
    password_hash: String,
    date_of_birth: NaiveDate,
    grade_qualification: String,
    role: UserRole,
    is_active: bool,
    total_xp: i32,
    daily_streak: i32,
    longest_streak: i32,
    last_activity_date: Option<NaiveDate>,
    total_lessons_completed: i32,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"`
    /// - email: `"user_{id}@example.com"`
    /// - role: learner, active, born 2010-01-01, no XP
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user_{}", id),
            email: Some(format!("user_{}@example.com", id)),
            password_hash: "unusable-hash".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default(),
            grade_qualification: "Grade 8".to_string(),
            role: UserRole::Learner,
            is_active: true,
            total_xp: 0,
            daily_streak: 0,
            longest_streak: 0,
            last_activity_date: None,
            total_lessons_completed: 0,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn total_xp(mut self, total_xp: i32) -> Self {
        self.total_xp = total_xp;
        self
    }

    /// Sets the current and longest streak along with the last activity date.
    pub fn streak(mut self, daily_streak: i32, last_activity_date: Option<NaiveDate>) -> Self {
        self.daily_streak = daily_streak;
        self.longest_streak = self.longest_streak.max(daily_streak);
        self.last_activity_date = last_activity_date;
        self
    }

    pub fn total_lessons_completed(mut self, count: i32) -> Self {
        self.total_lessons_completed = count;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            date_of_birth: ActiveValue::Set(self.date_of_birth),
            grade_qualification: ActiveValue::Set(self.grade_qualification),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(Utc::now()),
            last_login: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            total_xp: ActiveValue::Set(self.total_xp),
            current_level: ActiveValue::Set(self.total_xp / 500 + 1),
            daily_streak: ActiveValue::Set(self.daily_streak),
            longest_streak: ActiveValue::Set(self.longest_streak),
            last_activity_date: ActiveValue::Set(self.last_activity_date),
            points_today: ActiveValue::Set(0),
            total_lessons_completed: ActiveValue::Set(self.total_lessons_completed),
            total_exercises_completed: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a learner with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(UserRole::Admin).build().await
}

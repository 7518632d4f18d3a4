use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct AdminUserDto {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub date_of_birth: NaiveDate,
    pub grade_qualification: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdminUsersDto {
    pub users: Vec<AdminUserDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserStatusDto {
    pub id: i32,
    pub username: String,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ToggleStatusResponseDto {
    pub message: String,
    pub user: UserStatusDto,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct ChangeRoleDto {
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserRoleDto {
    pub id: i32,
    pub username: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ChangeRoleResponseDto {
    pub message: String,
    pub user: UserRoleDto,
}

/// Full account view for administrators.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdminUserProfileDto {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub date_of_birth: NaiveDate,
    pub grade_qualification: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub total_xp: i32,
    pub current_level: i32,
    pub daily_streak: i32,
    pub longest_streak: i32,
    pub total_lessons_completed: i32,
    pub total_exercises_completed: i32,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsDto {
    pub total_users: u64,
    pub total_lessons: u64,
    pub total_questions: u64,
    pub total_challenges: u64,
    pub active_users_today: u64,
}

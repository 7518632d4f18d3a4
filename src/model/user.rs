use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct ProfileDto {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub date_of_birth: NaiveDate,
    pub grade_qualification: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProfileResponseDto {
    pub user: ProfileDto,
}

/// Profile of the signed-in learner including gamification counters.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct LearnerProfileDto {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub date_of_birth: NaiveDate,
    pub grade_qualification: String,
    pub role: String,
    pub xp: i32,
    pub level: i32,
    pub streak: i32,
    pub longest_streak: i32,
    pub xp_to_next_level: i32,
    pub lessons_completed: i32,
    pub exercises_completed: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateProfileDto {
    pub email: Option<String>,
    pub grade_qualification: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserStatsDto {
    pub total_xp: i32,
    pub level: i32,
    pub xp_to_next_level: i32,
    pub daily_streak: i32,
    pub longest_streak: i32,
    pub points_today: i32,
    pub lessons_completed: i32,
    pub exercises_completed: i32,
    pub quizzes_passed: u64,
    pub achievements_earned: u64,
    pub total_lessons: u64,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntryDto {
    pub user_id: i32,
    pub username: String,
    pub period: String,
    pub xp_earned: i32,
    pub lessons_completed: i32,
    pub streak_count: i32,
    pub rank: Option<i32>,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

#[derive(Deserialize, ToSchema)]
pub struct LeaderboardQuery {
    pub period: Option<String>,
}

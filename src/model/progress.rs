use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::achievement::NewAchievementDto;

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct CompleteLessonDto {
    pub score: Option<i32>,
    pub time_spent: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LessonProgressDto {
    pub lesson_id: i32,
    pub completed: bool,
    pub score: Option<i32>,
    pub attempts: i32,
    pub completion_date: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CompleteLessonResponseDto {
    pub message: String,
    pub progress: LessonProgressDto,
    pub xp_awarded: i32,
    pub total_xp: i32,
    pub level: i32,
    pub new_achievements: Vec<NewAchievementDto>,
}

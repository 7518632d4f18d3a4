use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::achievement::NewAchievementDto;

/// Exercise as managed by administrators.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct ExerciseDto {
    pub id: i32,
    pub lesson_id: Option<i32>,
    pub question: String,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub difficulty: String,
    pub question_type: String,
    pub options: Vec<String>,
    pub xp_reward: i32,
    pub hints: Option<String>,
    pub time_limit: Option<i32>,
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct ExerciseInputDto {
    pub lesson_id: Option<i32>,
    pub question: Option<String>,
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
    pub difficulty: Option<String>,
    pub question_type: Option<String>,
    pub options: Option<Vec<String>>,
    pub xp_reward: Option<i32>,
    pub hints: Option<String>,
    pub time_limit: Option<i32>,
    pub tags: Option<String>,
}

/// Exercise served for practice.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct PracticeExerciseDto {
    pub id: i32,
    pub lesson_id: Option<i32>,
    pub question: String,
    pub correct_answer: String,
    pub options: Vec<String>,
    pub difficulty: String,
    pub xp_reward: i32,
    pub time_limit: Option<i32>,
    pub hints: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct RandomExercisesQuery {
    pub count: Option<u64>,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct ExerciseAttemptDto {
    pub answer: Option<String>,
    pub time_taken: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ExerciseAttemptResultDto {
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub xp_awarded: i32,
    pub total_xp: i32,
    pub new_achievements: Vec<NewAchievementDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct QuestionsDto {
    pub questions: Vec<ExerciseDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub message: String,
    pub question: ExerciseDto,
}

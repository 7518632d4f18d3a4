use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::achievement::NewAchievementDto;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct QuizDto {
    pub id: i32,
    pub lesson_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub time_limit: i32,
    pub max_attempts: i32,
    pub passing_score: i32,
    pub xp_reward: i32,
    pub question_count: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct QuizInputDto {
    pub lesson_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub time_limit: Option<i32>,
    pub max_attempts: Option<i32>,
    pub passing_score: Option<i32>,
    pub xp_reward: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct QuizQuestionDto {
    pub id: i32,
    pub quiz_id: i32,
    pub question: String,
    pub question_type: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub points: i32,
    pub order_index: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct QuizQuestionInputDto {
    pub quiz_id: Option<i32>,
    pub question: Option<String>,
    pub question_type: Option<String>,
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
    pub options: Option<Vec<String>>,
    pub points: Option<i32>,
    pub order_index: Option<i32>,
}

#[derive(Deserialize, ToSchema)]
pub struct QuizQuestionQuery {
    pub quiz_id: Option<i32>,
}

/// Quiz listed in the learner's challenge tab with the caller's attempt history.
///
/// `timeLimit` and `passingScore` duplicate their snake_case counterparts for older clients.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LearnerQuizDto {
    pub id: i32,
    pub lesson_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub time_limit: i32,
    #[serde(rename = "timeLimit")]
    pub time_limit_camel: i32,
    #[serde(rename = "passingScore")]
    pub passing_score_camel: i32,
    pub passing_score: i32,
    pub max_attempts: i32,
    pub xp_reward: i32,
    pub question_count: u64,
    pub attempts_used: u64,
    pub best_score: Option<i32>,
    pub is_passed: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct QuizAttemptDto {
    /// Answers keyed by question id.
    pub answers: HashMap<String, String>,
    pub time_taken: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct QuestionResultDto {
    pub question_id: i32,
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct QuizAttemptResultDto {
    pub attempt_id: i32,
    pub score: i32,
    pub correct_answers: usize,
    pub total_questions: usize,
    pub is_passed: bool,
    pub xp_awarded: i32,
    pub results: Vec<QuestionResultDto>,
    pub new_achievements: Vec<NewAchievementDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct QuizzesDto {
    pub quizzes: Vec<QuizDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub message: String,
    pub quiz: QuizDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct QuizQuestionsDto {
    pub questions: Vec<QuizQuestionDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct QuizQuestionResponseDto {
    pub message: String,
    pub question: QuizQuestionDto,
}

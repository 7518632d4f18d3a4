use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::achievement::NewAchievementDto;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct DailyChallengeDto {
    pub id: i32,
    pub challenge_date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub question: String,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub difficulty: String,
    pub xp_reward: i32,
    pub time_limit: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct CreateDailyChallengeDto {
    pub challenge_date: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub question: Option<String>,
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
    pub difficulty: Option<String>,
    pub xp_reward: Option<i32>,
    pub time_limit: Option<i32>,
}

/// Today's challenge as shown to a learner; the answer is withheld.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TodayChallengeDto {
    pub id: i32,
    pub challenge_date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub question: String,
    pub difficulty: String,
    pub xp_reward: i32,
    pub time_limit: i32,
    pub attempted: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct ChallengeAttemptDto {
    pub answer: Option<String>,
    pub time_taken: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ChallengeAttemptResultDto {
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub xp_awarded: i32,
    pub total_xp: i32,
    pub new_achievements: Vec<NewAchievementDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DailyChallengesDto {
    pub challenges: Vec<DailyChallengeDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DailyChallengeResponseDto {
    pub message: String,
    pub challenge: DailyChallengeDto,
}

//! Daily challenge domain model and parameters.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::DifficultyLevel;

use crate::{
    model::challenge::{CreateDailyChallengeDto, DailyChallengeDto, TodayChallengeDto},
    server::{
        error::AppError,
        model::unit::parse_difficulty,
        util::parse::{parse_date, required_text},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct DailyChallenge {
    pub id: i32,
    pub challenge_date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub question: String,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub difficulty: DifficultyLevel,
    pub xp_reward: i32,
    /// Seconds.
    pub time_limit: i32,
}

impl DailyChallenge {
    pub fn from_entity(entity: entity::daily_challenge::Model) -> Self {
        Self {
            id: entity.id,
            challenge_date: entity.challenge_date,
            title: entity.title,
            description: entity.description,
            question: entity.question,
            correct_answer: entity.correct_answer,
            explanation: entity.explanation,
            difficulty: entity.difficulty,
            xp_reward: entity.xp_reward,
            time_limit: entity.time_limit,
        }
    }

    pub fn into_dto(self) -> DailyChallengeDto {
        DailyChallengeDto {
            id: self.id,
            challenge_date: self.challenge_date,
            title: self.title,
            description: self.description,
            question: self.question,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
            difficulty: self.difficulty.as_str().to_string(),
            xp_reward: self.xp_reward,
            time_limit: self.time_limit,
        }
    }

    /// Learner view of the challenge, without the answer.
    pub fn into_today_dto(self, attempted: bool) -> TodayChallengeDto {
        TodayChallengeDto {
            id: self.id,
            challenge_date: self.challenge_date,
            title: self.title,
            description: self.description,
            question: self.question,
            difficulty: self.difficulty.as_str().to_string(),
            xp_reward: self.xp_reward,
            time_limit: self.time_limit,
            attempted,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDailyChallengeParams {
    pub challenge_date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub question: String,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub difficulty: DifficultyLevel,
    pub xp_reward: i32,
    pub time_limit: i32,
}

impl CreateDailyChallengeParams {
    pub fn from_dto(dto: CreateDailyChallengeDto) -> Result<Self, AppError> {
        let challenge_date = parse_date(&required_text(
            dto.challenge_date.as_deref(),
            "challenge_date",
        )?)?;
        let title = required_text(dto.title.as_deref(), "title")?;
        let question = required_text(dto.question.as_deref(), "question")?;
        let correct_answer = required_text(dto.correct_answer.as_deref(), "correct_answer")?;
        let difficulty = match dto.difficulty.as_deref() {
            Some(d) => parse_difficulty(d)?,
            None => DifficultyLevel::Beginner,
        };

        Ok(Self {
            challenge_date,
            title,
            description: dto.description,
            question,
            correct_answer,
            explanation: dto.explanation,
            difficulty,
            xp_reward: dto.xp_reward.unwrap_or(50),
            time_limit: dto.time_limit.unwrap_or(300),
        })
    }
}

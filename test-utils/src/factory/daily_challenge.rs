//! Daily challenge factory.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::DifficultyLevel;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test daily challenges.
pub struct DailyChallengeFactory<'a> {
    db: &'a DatabaseConnection,
    challenge_date: NaiveDate,
    correct_answer: String,
    xp_reward: i32,
}

impl<'a> DailyChallengeFactory<'a> {
    /// Defaults: today's challenge, answer `"144"`, 50 XP.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            challenge_date: Utc::now().date_naive(),
            correct_answer: "144".to_string(),
            xp_reward: 50,
        }
    }

    pub fn challenge_date(mut self, challenge_date: NaiveDate) -> Self {
        self.challenge_date = challenge_date;
        self
    }

    pub fn correct_answer(mut self, correct_answer: impl Into<String>) -> Self {
        self.correct_answer = correct_answer.into();
        self
    }

    pub fn xp_reward(mut self, xp_reward: i32) -> Self {
        self.xp_reward = xp_reward;
        self
    }

    pub async fn build(self) -> Result<entity::daily_challenge::Model, DbErr> {
        entity::daily_challenge::ActiveModel {
            challenge_date: ActiveValue::Set(self.challenge_date),
            title: ActiveValue::Set(format!("Challenge for {}", self.challenge_date)),
            description: ActiveValue::Set(None),
            question: ActiveValue::Set("What is 12 x 12?".to_string()),
            correct_answer: ActiveValue::Set(self.correct_answer),
            explanation: ActiveValue::Set(None),
            difficulty: ActiveValue::Set(DifficultyLevel::Beginner),
            xp_reward: ActiveValue::Set(self.xp_reward),
            time_limit: ActiveValue::Set(300),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates today's challenge with default values.
pub async fn create_daily_challenge(
    db: &DatabaseConnection,
) -> Result<entity::daily_challenge::Model, DbErr> {
    DailyChallengeFactory::new(db).build().await
}

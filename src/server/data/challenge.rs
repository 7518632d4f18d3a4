//! Daily challenge data repository.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::challenge::{CreateDailyChallengeParams, DailyChallenge};

pub struct ChallengeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChallengeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateDailyChallengeParams) -> Result<DailyChallenge, DbErr> {
        let entity = entity::daily_challenge::ActiveModel {
            challenge_date: ActiveValue::Set(params.challenge_date),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            question: ActiveValue::Set(params.question),
            correct_answer: ActiveValue::Set(params.correct_answer),
            explanation: ActiveValue::Set(params.explanation),
            difficulty: ActiveValue::Set(params.difficulty),
            xp_reward: ActiveValue::Set(params.xp_reward),
            time_limit: ActiveValue::Set(params.time_limit),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DailyChallenge::from_entity(entity))
    }

    /// Gets all challenges, most recent date first
    pub async fn get_all(&self) -> Result<Vec<DailyChallenge>, DbErr> {
        let entities = entity::prelude::DailyChallenge::find()
            .order_by_desc(entity::daily_challenge::Column::ChallengeDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DailyChallenge::from_entity).collect())
    }

    pub async fn get_by_date(&self, date: NaiveDate) -> Result<Option<DailyChallenge>, DbErr> {
        let entity = entity::prelude::DailyChallenge::find()
            .filter(entity::daily_challenge::Column::ChallengeDate.eq(date))
            .one(self.db)
            .await?;

        Ok(entity.map(DailyChallenge::from_entity))
    }

    pub async fn has_attempted(&self, user_id: i32, challenge_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ChallengeAttempt::find()
            .filter(entity::challenge_attempt::Column::UserId.eq(user_id))
            .filter(entity::challenge_attempt::Column::ChallengeId.eq(challenge_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Stores a user's answer to a challenge
    pub async fn create_attempt(
        &self,
        user_id: i32,
        challenge_id: i32,
        answer: String,
        is_correct: bool,
        time_taken: Option<i32>,
        attempted_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::challenge_attempt::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            challenge_id: ActiveValue::Set(challenge_id),
            user_answer: ActiveValue::Set(Some(answer)),
            is_correct: ActiveValue::Set(is_correct),
            time_taken: ActiveValue::Set(time_taken),
            attempted_at: ActiveValue::Set(attempted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::DailyChallenge::find().count(self.db).await
    }
}

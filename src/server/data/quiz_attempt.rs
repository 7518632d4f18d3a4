//! Quiz attempt data repository.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::server::model::quiz::{CreateQuizAttemptParam, QuizAttemptSummary};

pub struct QuizAttemptRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizAttemptRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a graded attempt and returns its ID
    pub async fn create(&self, param: CreateQuizAttemptParam) -> Result<i32, DbErr> {
        let entity = entity::quiz_attempt::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            quiz_id: ActiveValue::Set(param.quiz_id),
            score: ActiveValue::Set(param.score),
            time_taken: ActiveValue::Set(param.time_taken),
            answers: ActiveValue::Set(Some(param.answers)),
            started_at: ActiveValue::Set(param.started_at),
            completed_at: ActiveValue::Set(Some(param.completed_at)),
            is_passed: ActiveValue::Set(param.is_passed),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Summarises a user's attempts at a quiz: count, best score and whether any passed
    pub async fn summary(&self, user_id: i32, quiz_id: i32) -> Result<QuizAttemptSummary, DbErr> {
        let attempts = entity::prelude::QuizAttempt::find()
            .filter(entity::quiz_attempt::Column::UserId.eq(user_id))
            .filter(entity::quiz_attempt::Column::QuizId.eq(quiz_id))
            .all(self.db)
            .await?;

        Ok(QuizAttemptSummary {
            attempts_used: attempts.len() as u64,
            best_score: attempts.iter().map(|a| a.score).max(),
            is_passed: attempts.iter().any(|a| a.is_passed),
        })
    }

    /// Counts a user's attempts that scored 100
    pub async fn count_perfect(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::QuizAttempt::find()
            .filter(entity::quiz_attempt::Column::UserId.eq(user_id))
            .filter(entity::quiz_attempt::Column::Score.eq(100))
            .count(self.db)
            .await
    }

    /// Counts distinct quizzes a user has passed at least once
    pub async fn count_passed_quizzes(&self, user_id: i32) -> Result<u64, DbErr> {
        let quiz_ids: Vec<i32> = entity::prelude::QuizAttempt::find()
            .select_only()
            .column(entity::quiz_attempt::Column::QuizId)
            .filter(entity::quiz_attempt::Column::UserId.eq(user_id))
            .filter(entity::quiz_attempt::Column::IsPassed.eq(true))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(quiz_ids.into_iter().collect::<HashSet<_>>().len() as u64)
    }
}

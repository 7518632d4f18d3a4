//! Lesson progress data repository.
//!
//! One `user_progress` row exists per user and lesson. Rows are created on the first
//! lesson attempt or exercise answer and merged on later visits.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect,
};

use crate::server::model::progress::{LessonAttemptParam, LessonProgress, LESSON_PASS_SCORE};

pub struct ProgressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the progress row of a user for a lesson
    pub async fn get(&self, user_id: i32, lesson_id: i32) -> Result<Option<LessonProgress>, DbErr> {
        let entity = entity::prelude::UserProgress::find()
            .filter(entity::user_progress::Column::UserId.eq(user_id))
            .filter(entity::user_progress::Column::LessonId.eq(lesson_id))
            .one(self.db)
            .await?;

        Ok(entity.map(LessonProgress::from_entity))
    }

    /// Records a lesson attempt, creating or merging the progress row.
    ///
    /// # Returns
    /// - `Ok((progress, newly_completed))` - Stored row and whether this attempt completed
    ///   the lesson for the first time
    /// - `Err(DbErr)` - Database error
    pub async fn record_attempt(
        &self,
        param: LessonAttemptParam,
    ) -> Result<(LessonProgress, bool), DbErr> {
        let Some(mut progress) = self.get(param.user_id, param.lesson_id).await? else {
            let completed = param.score >= LESSON_PASS_SCORE;
            let entity = entity::user_progress::ActiveModel {
                user_id: ActiveValue::Set(param.user_id),
                lesson_id: ActiveValue::Set(Some(param.lesson_id)),
                completed: ActiveValue::Set(completed),
                completion_date: ActiveValue::Set(completed.then_some(param.now)),
                score: ActiveValue::Set(Some(param.score)),
                time_spent: ActiveValue::Set(Some(param.time_spent.max(0))),
                attempts: ActiveValue::Set(1),
                content_sections_viewed: ActiveValue::Set(None),
                exercises_completed: ActiveValue::Set(0),
                exercises_correct: ActiveValue::Set(0),
                last_accessed: ActiveValue::Set(param.now),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            return Ok((LessonProgress::from_entity(entity), completed));
        };

        let newly_completed = progress.merge_attempt(param.score, param.time_spent, param.now);

        entity::user_progress::ActiveModel {
            id: ActiveValue::Unchanged(progress.id),
            completed: ActiveValue::Set(progress.completed),
            completion_date: ActiveValue::Set(progress.completion_date),
            score: ActiveValue::Set(progress.score),
            time_spent: ActiveValue::Set(progress.time_spent),
            attempts: ActiveValue::Set(progress.attempts),
            last_accessed: ActiveValue::Set(progress.last_accessed),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok((progress, newly_completed))
    }

    /// Counts an exercise answer against the lesson's progress row.
    pub async fn record_exercise(
        &self,
        user_id: i32,
        lesson_id: i32,
        correct: bool,
        now: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let correct_delta = i32::from(correct);

        match self.get(user_id, lesson_id).await? {
            Some(progress) => {
                entity::user_progress::ActiveModel {
                    id: ActiveValue::Unchanged(progress.id),
                    exercises_completed: ActiveValue::Set(progress.exercises_completed + 1),
                    exercises_correct: ActiveValue::Set(
                        progress.exercises_correct + correct_delta,
                    ),
                    last_accessed: ActiveValue::Set(now),
                    ..Default::default()
                }
                .update(self.db)
                .await?;
            }
            None => {
                entity::user_progress::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    lesson_id: ActiveValue::Set(Some(lesson_id)),
                    completed: ActiveValue::Set(false),
                    completion_date: ActiveValue::Set(None),
                    score: ActiveValue::Set(None),
                    time_spent: ActiveValue::Set(None),
                    attempts: ActiveValue::Set(0),
                    content_sections_viewed: ActiveValue::Set(None),
                    exercises_completed: ActiveValue::Set(1),
                    exercises_correct: ActiveValue::Set(correct_delta),
                    last_accessed: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Gets the IDs of every lesson the user has completed
    pub async fn completed_lesson_ids(&self, user_id: i32) -> Result<HashSet<i32>, DbErr> {
        let ids: Vec<Option<i32>> = entity::prelude::UserProgress::find()
            .select_only()
            .column(entity::user_progress::Column::LessonId)
            .filter(entity::user_progress::Column::UserId.eq(user_id))
            .filter(entity::user_progress::Column::Completed.eq(true))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().flatten().collect())
    }
}

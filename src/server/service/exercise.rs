use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{exercise::ExerciseRepository, progress::ProgressRepository},
    error::AppError,
    model::exercise::{CreateExerciseParams, Exercise, UpdateExerciseParams},
    service::gamification::{Activity, ActivityOutcome, GamificationService},
    util::answer::answers_match,
};

const DEFAULT_RANDOM_COUNT: u64 = 10;
const MAX_RANDOM_COUNT: u64 = 50;

/// Graded answer to a practice exercise.
#[derive(Debug, Clone)]
pub struct ExerciseAttemptOutcome {
    pub exercise: Exercise,
    pub correct: bool,
    pub xp_awarded: i32,
    pub activity: ActivityOutcome,
}

pub struct ExerciseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExerciseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Exercise>, AppError> {
        Ok(ExerciseRepository::new(self.db).get_all().await?)
    }

    pub async fn create(&self, params: CreateExerciseParams) -> Result<Exercise, AppError> {
        let exercise = ExerciseRepository::new(self.db).create(params).await?;

        tracing::info!("Created exercise {}", exercise.id);

        Ok(exercise)
    }

    pub async fn update(&self, params: UpdateExerciseParams) -> Result<Exercise, AppError> {
        ExerciseRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ExerciseRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Question not found".to_string()));
        }

        Ok(())
    }

    /// Picks random practice exercises; `count` defaults to 10 and is clamped to 1..=50.
    pub async fn random(&self, count: Option<u64>) -> Result<Vec<Exercise>, AppError> {
        let count = count
            .unwrap_or(DEFAULT_RANDOM_COUNT)
            .clamp(1, MAX_RANDOM_COUNT) as usize;

        Ok(ExerciseRepository::new(self.db).get_random(count).await?)
    }

    /// Grades a practice answer and credits the learner.
    ///
    /// Every attempt counts towards the learner's completed exercises and, for exercises
    /// that belong to a lesson, towards that lesson's progress row. Only a correct answer
    /// earns the exercise's XP.
    pub async fn attempt(
        &self,
        user_id: i32,
        exercise_id: i32,
        answer: Option<&str>,
        time_taken: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<ExerciseAttemptOutcome, AppError> {
        let Some(exercise) = ExerciseRepository::new(self.db)
            .get_by_id(exercise_id)
            .await?
        else {
            return Err(AppError::NotFound("Exercise not found".to_string()));
        };
        let Some(answer) = answer else {
            return Err(AppError::BadRequest("Answer is required".to_string()));
        };

        let correct = answers_match(answer, &exercise.correct_answer);
        let xp_awarded = if correct { exercise.xp_reward } else { 0 };

        if let Some(lesson_id) = exercise.lesson_id {
            ProgressRepository::new(self.db)
                .record_exercise(user_id, lesson_id, correct, now)
                .await?;
        }

        let activity = GamificationService::new(self.db)
            .record_activity(
                user_id,
                Activity {
                    xp: xp_awarded,
                    exercises_completed: 1,
                    correct_solve_seconds: time_taken.filter(|_| correct),
                    ..Default::default()
                },
                now,
            )
            .await?;

        Ok(ExerciseAttemptOutcome {
            exercise,
            correct,
            xp_awarded,
            activity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn correct_answer_awards_xp_and_counts_progress() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let lesson = factory::create_lesson(db).await?;
        let exercise = factory::exercise::ExerciseFactory::new(db)
            .lesson_id(lesson.id)
            .correct_answer("Nikhilam")
            .xp_reward(15)
            .build()
            .await?;

        let outcome = ExerciseService::new(db)
            .attempt(user.id, exercise.id, Some("  nikhilam "), Some(40), Utc::now())
            .await?;

        assert!(outcome.correct);
        assert_eq!(outcome.xp_awarded, 15);
        assert_eq!(outcome.activity.user.stats.total_xp, 15);
        assert_eq!(outcome.activity.user.stats.total_exercises_completed, 1);

        let progress = ProgressRepository::new(db)
            .get(user.id, lesson.id)
            .await?
            .unwrap();
        assert_eq!(progress.exercises_completed, 1);
        assert_eq!(progress.exercises_correct, 1);
        assert!(!progress.completed);

        Ok(())
    }

    #[tokio::test]
    async fn wrong_answer_still_counts_the_attempt() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let exercise = factory::exercise::ExerciseFactory::new(db)
            .correct_answer("42")
            .build()
            .await?;

        let outcome = ExerciseService::new(db)
            .attempt(user.id, exercise.id, Some("41"), None, Utc::now())
            .await?;

        assert!(!outcome.correct);
        assert_eq!(outcome.xp_awarded, 0);
        assert_eq!(outcome.activity.user.stats.total_xp, 0);
        assert_eq!(outcome.activity.user.stats.total_exercises_completed, 1);
        assert_eq!(outcome.activity.user.stats.daily_streak, 0);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_exercise_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;

        let result = ExerciseService::new(db)
            .attempt(user.id, 77, Some("1"), None, Utc::now())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn random_count_is_clamped() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        for _ in 0..3 {
            factory::create_exercise(db).await?;
        }
        let service = ExerciseService::new(db);

        assert_eq!(service.random(Some(0)).await?.len(), 1);
        assert_eq!(service.random(Some(2)).await?.len(), 2);
        assert_eq!(service.random(None).await?.len(), 3);

        Ok(())
    }
}

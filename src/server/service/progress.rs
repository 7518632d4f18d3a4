use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{lesson::LessonRepository, progress::ProgressRepository},
    error::AppError,
    model::progress::{LessonAttemptParam, LessonProgress},
    service::gamification::{Activity, ActivityOutcome, GamificationService},
};

/// Result of submitting a lesson score.
#[derive(Debug, Clone)]
pub struct LessonCompletion {
    pub lesson_id: i32,
    pub progress: LessonProgress,
    pub newly_completed: bool,
    pub xp_awarded: i32,
    pub activity: ActivityOutcome,
}

pub struct ProgressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a lesson score for a learner.
    ///
    /// The first attempt scoring at least 65 completes the lesson and earns its XP once;
    /// later attempts only update the best score, time spent and attempt count.
    ///
    /// # Returns
    /// - `Ok(LessonCompletion)` - Stored progress and what the attempt earned
    /// - `Err(AppError::BadRequest)` - Score missing or outside 0..=100
    /// - `Err(AppError::NotFound)` - Lesson missing or unpublished
    pub async fn complete_lesson(
        &self,
        user_id: i32,
        lesson_id: i32,
        score: Option<i32>,
        time_spent: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<LessonCompletion, AppError> {
        let Some(score) = score else {
            return Err(AppError::BadRequest("Score is required".to_string()));
        };
        if !(0..=100).contains(&score) {
            return Err(AppError::BadRequest(
                "Score must be between 0 and 100".to_string(),
            ));
        }

        let lesson = match LessonRepository::new(self.db).get_by_id(lesson_id).await? {
            Some(lesson) if lesson.is_published => lesson,
            _ => return Err(AppError::NotFound("Lesson not found".to_string())),
        };

        let (progress, newly_completed) = ProgressRepository::new(self.db)
            .record_attempt(LessonAttemptParam {
                user_id,
                lesson_id,
                score,
                time_spent: time_spent.unwrap_or(0),
                now,
            })
            .await?;

        let xp_awarded = if newly_completed { lesson.xp_reward } else { 0 };
        let activity = GamificationService::new(self.db)
            .record_activity(
                user_id,
                Activity {
                    xp: xp_awarded,
                    lessons_completed: i32::from(newly_completed),
                    ..Default::default()
                },
                now,
            )
            .await?;

        if newly_completed {
            tracing::info!("User {} completed lesson {}", user_id, lesson_id);
        }

        Ok(LessonCompletion {
            lesson_id,
            progress,
            newly_completed,
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
    async fn first_passing_score_completes_and_awards_once() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let lesson = factory::lesson::LessonFactory::new(db)
            .xp_reward(60)
            .build()
            .await?;
        let service = ProgressService::new(db);

        let failed = service
            .complete_lesson(user.id, lesson.id, Some(40), Some(100), Utc::now())
            .await?;
        assert!(!failed.progress.completed);
        assert_eq!(failed.xp_awarded, 0);

        let passed = service
            .complete_lesson(user.id, lesson.id, Some(65), Some(50), Utc::now())
            .await?;
        assert!(passed.newly_completed);
        assert_eq!(passed.xp_awarded, 60);
        assert_eq!(passed.progress.attempts, 2);
        assert_eq!(passed.progress.time_spent, Some(150));
        assert_eq!(passed.activity.user.stats.total_lessons_completed, 1);

        let again = service
            .complete_lesson(user.id, lesson.id, Some(95), None, Utc::now())
            .await?;
        assert!(!again.newly_completed);
        assert_eq!(again.xp_awarded, 0);
        assert_eq!(again.progress.score, Some(95));
        assert_eq!(again.activity.user.stats.total_xp, 60);
        assert_eq!(again.activity.user.stats.total_lessons_completed, 1);

        Ok(())
    }

    #[tokio::test]
    async fn huge_time_spent_does_not_overflow() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let lesson = factory::lesson::LessonFactory::new(db).build().await?;
        let service = ProgressService::new(db);

        service
            .complete_lesson(user.id, lesson.id, Some(30), Some(i32::MAX), Utc::now())
            .await?;
        let second = service
            .complete_lesson(user.id, lesson.id, Some(30), Some(i32::MAX), Utc::now())
            .await?;

        assert_eq!(second.progress.time_spent, Some(i32::MAX));
        assert_eq!(second.progress.attempts, 2);

        Ok(())
    }

    #[tokio::test]
    async fn validates_score_before_lookup() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let service = ProgressService::new(db);

        let missing = service
            .complete_lesson(user.id, 1, None, None, Utc::now())
            .await;
        assert!(matches!(missing, Err(AppError::BadRequest(ref m)) if m == "Score is required"));

        let too_high = service
            .complete_lesson(user.id, 1, Some(101), None, Utc::now())
            .await;
        assert!(matches!(
            too_high,
            Err(AppError::BadRequest(ref m)) if m == "Score must be between 0 and 100"
        ));

        Ok(())
    }

    #[tokio::test]
    async fn unpublished_lesson_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let draft = factory::lesson::LessonFactory::new(db)
            .is_published(false)
            .build()
            .await?;

        let result = ProgressService::new(db)
            .complete_lesson(user.id, draft.id, Some(90), None, Utc::now())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn completing_first_lesson_unlocks_first_steps() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let lesson = factory::create_lesson(db).await?;
        factory::achievement::AchievementFactory::new(db)
            .name("First Steps")
            .xp_reward(10)
            .build()
            .await?;

        let result = ProgressService::new(db)
            .complete_lesson(user.id, lesson.id, Some(80), None, Utc::now())
            .await?;

        assert_eq!(result.activity.new_achievements.len(), 1);
        assert_eq!(result.activity.new_achievements[0].name, "First Steps");
        assert_eq!(result.activity.user.stats.total_xp, 60);

        Ok(())
    }
}

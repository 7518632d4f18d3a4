//! XP, streak and achievement bookkeeping shared by every scoring activity.
//!
//! Lesson completion, exercise answers, quiz attempts and daily challenges all report
//! what happened as an `Activity`. `GamificationService::record_activity` applies it to
//! the learner's counters, unlocks any achievements that are now met and persists the
//! result in one place.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        achievement::AchievementRepository, quiz_attempt::QuizAttemptRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        achievement::{Achievement, AchievementCriteria, AchievementProgress},
        user::User,
    },
};

/// What a single learner action earned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Activity {
    pub xp: i32,
    /// Lessons completed for the first time by this action.
    pub lessons_completed: i32,
    /// Exercises answered by this action, right or wrong.
    pub exercises_completed: i32,
    /// Seconds taken by a correct exercise answer.
    pub correct_solve_seconds: Option<i32>,
}

/// Learner state after an activity and the achievements it unlocked.
#[derive(Debug, Clone)]
pub struct ActivityOutcome {
    pub user: User,
    pub new_achievements: Vec<Achievement>,
}

pub struct GamificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GamificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies an activity to a learner.
    ///
    /// XP-earning activity advances the daily streak for the UTC date of `now`. Every
    /// achievement the learner has not earned yet is then checked; each one met is
    /// recorded as unread and its XP reward added.
    ///
    /// # Returns
    /// - `Ok(ActivityOutcome)` - Updated user and newly unlocked achievements
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn record_activity(
        &self,
        user_id: i32,
        activity: Activity,
        now: DateTime<Utc>,
    ) -> Result<ActivityOutcome, AppError> {
        let user_repo = UserRepository::new(self.db);
        let Some(mut user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if activity.xp > 0 {
            user.stats.record_activity(now.date_naive());
            user.stats.award_xp(activity.xp);
        }
        user.stats.total_lessons_completed = user
            .stats
            .total_lessons_completed
            .saturating_add(activity.lessons_completed);
        user.stats.total_exercises_completed = user
            .stats
            .total_exercises_completed
            .saturating_add(activity.exercises_completed);

        let new_achievements = self.unlock_achievements(&mut user, &activity, now).await?;

        user_repo.update_stats(user.id, &user.stats).await?;

        Ok(ActivityOutcome {
            user,
            new_achievements,
        })
    }

    async fn unlock_achievements(
        &self,
        user: &mut User,
        activity: &Activity,
        now: DateTime<Utc>,
    ) -> Result<Vec<Achievement>, AppError> {
        let achievement_repo = AchievementRepository::new(self.db);

        let earned = achievement_repo.earned_ids(user.id).await?;
        let candidates: Vec<(Achievement, AchievementCriteria)> = achievement_repo
            .get_all()
            .await?
            .into_iter()
            .filter(|a| !earned.contains(&a.id))
            .filter_map(|a| a.criteria.map(|c| (a, c)))
            .collect();
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let needs_quiz_count = candidates
            .iter()
            .any(|(_, c)| matches!(c, AchievementCriteria::PerfectQuiz(_)));
        let perfect_quizzes = if needs_quiz_count {
            QuizAttemptRepository::new(self.db)
                .count_perfect(user.id)
                .await?
        } else {
            0
        };

        let progress = AchievementProgress {
            lessons_completed: user.stats.total_lessons_completed,
            daily_streak: user.stats.daily_streak,
            perfect_quizzes,
            correct_solve_seconds: activity.correct_solve_seconds,
        };

        let mut unlocked = Vec::new();
        for (achievement, criteria) in candidates {
            if !progress.satisfies(criteria) {
                continue;
            }

            achievement_repo.award(user.id, achievement.id, now).await?;
            user.stats.award_xp(achievement.xp_reward);

            tracing::info!(
                "User {} earned achievement {} ({})",
                user.id,
                achievement.id,
                achievement.name
            );
            unlocked.push(achievement);
        }

        Ok(unlocked)
    }
}

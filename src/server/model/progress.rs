//! Per-lesson progress of a learner.

use chrono::{DateTime, Utc};

use crate::model::progress::LessonProgressDto;

/// Minimum lesson score that counts as completing the lesson.
pub const LESSON_PASS_SCORE: i32 = 65;

#[derive(Debug, Clone, PartialEq)]
pub struct LessonProgress {
    pub id: i32,
    pub user_id: i32,
    pub lesson_id: Option<i32>,
    pub completed: bool,
    pub completion_date: Option<DateTime<Utc>>,
    pub score: Option<i32>,
    pub time_spent: Option<i32>,
    pub attempts: i32,
    pub exercises_completed: i32,
    pub exercises_correct: i32,
    pub last_accessed: DateTime<Utc>,
}

impl LessonProgress {
    pub fn from_entity(entity: entity::user_progress::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            lesson_id: entity.lesson_id,
            completed: entity.completed,
            completion_date: entity.completion_date,
            score: entity.score,
            time_spent: entity.time_spent,
            attempts: entity.attempts,
            exercises_completed: entity.exercises_completed,
            exercises_correct: entity.exercises_correct,
            last_accessed: entity.last_accessed,
        }
    }

    /// Merges another attempt into an existing row.
    ///
    /// Keeps the best score, accumulates time and counts the attempt. Returns `true`
    /// when this attempt completes the lesson for the first time.
    pub fn merge_attempt(&mut self, score: i32, time_spent: i32, now: DateTime<Utc>) -> bool {
        self.attempts = self.attempts.saturating_add(1);
        self.score = Some(self.score.map_or(score, |best| best.max(score)));
        self.time_spent = Some(
            self.time_spent
                .unwrap_or(0)
                .saturating_add(time_spent.max(0)),
        );
        self.last_accessed = now;

        if !self.completed && score >= LESSON_PASS_SCORE {
            self.completed = true;
            self.completion_date = Some(now);
            return true;
        }

        false
    }

    pub fn into_dto(self, lesson_id: i32) -> LessonProgressDto {
        LessonProgressDto {
            lesson_id,
            completed: self.completed,
            score: self.score,
            attempts: self.attempts,
            completion_date: self.completion_date,
        }
    }
}

/// Outcome of one lesson attempt to merge into the stored progress row.
#[derive(Debug, Clone, Copy)]
pub struct LessonAttemptParam {
    pub user_id: i32,
    pub lesson_id: i32,
    pub score: i32,
    pub time_spent: i32,
    pub now: DateTime<Utc>,
}

/// Rounded percentage of completed lessons; zero for an empty unit.
///
/// Halves round to the nearest even integer, so 1 of 8 lessons reports 12.
pub fn completion_percentage(completed: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }

    (completed as f64 * 100.0 / total as f64).round_ties_even() as i32
}

/// Unlock flags for units in display order: the first unit is always open and every
/// later unit opens once the one before it reaches 100%.
pub fn unlock_flags(progress: &[i32]) -> Vec<bool> {
    progress
        .iter()
        .enumerate()
        .map(|(i, _)| i == 0 || progress[i - 1] >= 100)
        .collect()
}

//! Gamification counters carried on every user and the rules that update them.

use chrono::NaiveDate;

use crate::model::{admin::AdminStatsDto, user::UserStatsDto};

/// XP needed to advance one level.
pub const XP_PER_LEVEL: i32 = 500;

/// Level reached with `total_xp`. Everyone starts at level 1.
pub fn level_for_xp(total_xp: i32) -> i32 {
    total_xp.max(0) / XP_PER_LEVEL + 1
}

/// XP still missing before the next level is reached.
pub fn xp_to_next_level(total_xp: i32) -> i32 {
    XP_PER_LEVEL - total_xp.max(0) % XP_PER_LEVEL
}

/// Experience, streak and completion counters of a learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LearnerStats {
    pub total_xp: i32,
    pub current_level: i32,
    pub daily_streak: i32,
    pub longest_streak: i32,
    pub last_activity_date: Option<NaiveDate>,
    pub points_today: i32,
    pub total_lessons_completed: i32,
    pub total_exercises_completed: i32,
}

impl LearnerStats {
    /// Registers activity on `today`, advancing or resetting the daily streak.
    ///
    /// Activity on the same day leaves the streak unchanged, activity on the next day
    /// extends it, and anything later starts a new streak of one. `points_today` is
    /// reset whenever the day changes.
    pub fn record_activity(&mut self, today: NaiveDate) {
        match self.last_activity_date {
            Some(last) if last == today => {}
            Some(last) if last.succ_opt() == Some(today) => {
                self.daily_streak = self.daily_streak.saturating_add(1);
                self.points_today = 0;
            }
            _ => {
                self.daily_streak = 1;
                self.points_today = 0;
            }
        }

        self.longest_streak = self.longest_streak.max(self.daily_streak);
        self.last_activity_date = Some(today);
    }

    /// Adds XP to the running and daily totals and recomputes the level.
    pub fn award_xp(&mut self, xp: i32) {
        if xp <= 0 {
            return;
        }

        self.total_xp = self.total_xp.saturating_add(xp);
        self.points_today = self.points_today.saturating_add(xp);
        self.current_level = level_for_xp(self.total_xp);
    }

    pub fn xp_to_next_level(&self) -> i32 {
        xp_to_next_level(self.total_xp)
    }
}

/// A learner's counters together with totals gathered from other tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearnerSummary {
    pub stats: LearnerStats,
    pub quizzes_passed: u64,
    pub achievements_earned: u64,
    /// Published lessons available on the platform.
    pub total_lessons: u64,
}

impl LearnerSummary {
    pub fn into_dto(self) -> UserStatsDto {
        UserStatsDto {
            total_xp: self.stats.total_xp,
            level: self.stats.current_level,
            xp_to_next_level: self.stats.xp_to_next_level(),
            daily_streak: self.stats.daily_streak,
            longest_streak: self.stats.longest_streak,
            points_today: self.stats.points_today,
            lessons_completed: self.stats.total_lessons_completed,
            exercises_completed: self.stats.total_exercises_completed,
            quizzes_passed: self.quizzes_passed,
            achievements_earned: self.achievements_earned,
            total_lessons: self.total_lessons,
        }
    }
}

/// Platform-wide counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformStats {
    pub total_users: u64,
    pub total_lessons: u64,
    pub total_questions: u64,
    pub total_challenges: u64,
    pub active_users_today: u64,
}

impl PlatformStats {
    pub fn into_dto(self) -> AdminStatsDto {
        AdminStatsDto {
            total_users: self.total_users,
            total_lessons: self.total_lessons,
            total_questions: self.total_questions,
            total_challenges: self.total_challenges,
            active_users_today: self.active_users_today,
        }
    }
}

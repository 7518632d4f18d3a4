//! Achievement catalogue entries, unlock criteria and earned achievements.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::achievement::{AchievementDto, NewAchievementDto, NotificationDto};

/// Unlock rule stored as a single-key JSON object, e.g. `{"daily_streak": 7}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCriteria {
    /// Total completed lessons reaches the threshold.
    LessonsCompleted(i32),
    /// Current daily streak reaches the threshold.
    DailyStreak(i32),
    /// Number of quiz attempts scored 100 reaches the threshold.
    PerfectQuiz(i32),
    /// An exercise answered correctly in fewer than this many seconds.
    QuickSolve(i32),
}

impl AchievementCriteria {
    /// Parses stored criteria. Malformed or unknown criteria yield `None` and never match.
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// What the learner has reached after an activity, used to evaluate criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AchievementProgress {
    pub lessons_completed: i32,
    pub daily_streak: i32,
    pub perfect_quizzes: u64,
    /// Seconds taken by a correct exercise answer in the current activity.
    pub correct_solve_seconds: Option<i32>,
}

impl AchievementProgress {
    pub fn satisfies(&self, criteria: AchievementCriteria) -> bool {
        match criteria {
            AchievementCriteria::LessonsCompleted(n) => self.lessons_completed >= n,
            AchievementCriteria::DailyStreak(n) => self.daily_streak >= n,
            AchievementCriteria::PerfectQuiz(n) => self.perfect_quizzes >= n.max(0) as u64,
            AchievementCriteria::QuickSolve(secs) => {
                matches!(self.correct_solve_seconds, Some(t) if t >= 0 && t < secs)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub badge_image: Option<String>,
    pub xp_reward: i32,
    pub criteria: Option<AchievementCriteria>,
    pub category: Option<String>,
    pub rarity: String,
    pub is_hidden: bool,
}

impl Achievement {
    pub fn from_entity(entity: entity::achievement::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            icon: entity.icon,
            badge_image: entity.badge_image,
            xp_reward: entity.xp_reward,
            criteria: entity.criteria.as_deref().and_then(AchievementCriteria::parse),
            category: entity.category,
            rarity: entity.rarity,
            is_hidden: entity.is_hidden,
        }
    }

    pub fn into_dto(self, earned_date: Option<DateTime<Utc>>) -> AchievementDto {
        AchievementDto {
            id: self.id,
            name: self.name,
            description: self.description,
            icon: self.icon,
            badge_image: self.badge_image,
            xp_reward: self.xp_reward,
            category: self.category,
            rarity: self.rarity,
            earned: earned_date.is_some(),
            earned_date,
        }
    }

    pub fn into_new_dto(self) -> NewAchievementDto {
        NewAchievementDto {
            id: self.id,
            name: self.name,
            description: self.description,
            icon: self.icon,
            xp_reward: self.xp_reward,
            rarity: self.rarity,
        }
    }
}

/// Achievement awarded to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct EarnedAchievement {
    /// ID of the `user_achievement` row.
    pub id: i32,
    pub achievement: Achievement,
    pub earned_date: DateTime<Utc>,
    pub is_new: bool,
}

impl EarnedAchievement {
    pub fn into_notification_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            achievement: self.achievement.into_new_dto(),
            earned_date: self.earned_date,
        }
    }
}

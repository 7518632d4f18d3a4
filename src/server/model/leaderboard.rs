use chrono::NaiveDate;

use crate::model::leaderboard::LeaderboardEntryDto;

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub user_id: i32,
    pub username: String,
    pub period: String,
    pub xp_earned: i32,
    pub lessons_completed: i32,
    pub streak_count: i32,
    pub rank: Option<i32>,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

impl LeaderboardEntry {
    pub fn from_entity(entity: entity::leaderboard::Model, username: String) -> Self {
        Self {
            user_id: entity.user_id,
            username,
            period: entity.period,
            xp_earned: entity.xp_earned,
            lessons_completed: entity.lessons_completed,
            streak_count: entity.streak_count,
            rank: entity.rank,
            period_start: entity.period_start,
            period_end: entity.period_end,
        }
    }

    pub fn into_dto(self) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            user_id: self.user_id,
            username: self.username,
            period: self.period,
            xp_earned: self.xp_earned,
            lessons_completed: self.lessons_completed,
            streak_count: self.streak_count,
            rank: self.rank,
            period_start: self.period_start,
            period_end: self.period_end,
        }
    }
}

//! Leaderboard data repository. Rows are read as stored; nothing here ranks users.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::leaderboard::LeaderboardEntry;

pub struct LeaderboardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the rows of a period ordered by rank, unranked rows last, then by XP
    pub async fn get_by_period(&self, period: &str) -> Result<Vec<LeaderboardEntry>, DbErr> {
        let rows = entity::prelude::Leaderboard::find()
            .filter(entity::leaderboard::Column::Period.eq(period))
            .order_by_desc(entity::leaderboard::Column::XpEarned)
            .order_by_asc(entity::leaderboard::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let mut entries: Vec<LeaderboardEntry> = rows
            .into_iter()
            .map(|(row, user)| {
                let username = user.map(|u| u.username).unwrap_or_default();
                LeaderboardEntry::from_entity(row, username)
            })
            .collect();
        entries.sort_by_key(|e| (e.rank.is_none(), e.rank));

        Ok(entries)
    }
}

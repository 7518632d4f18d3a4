use sea_orm::DatabaseConnection;

use crate::server::{
    data::leaderboard::LeaderboardRepository, error::AppError,
    model::leaderboard::LeaderboardEntry,
};

const DEFAULT_PERIOD: &str = "weekly";

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stored standings for a period, `weekly` when none is given.
    pub async fn standings(&self, period: Option<&str>) -> Result<Vec<LeaderboardEntry>, AppError> {
        let period = period
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PERIOD);

        Ok(LeaderboardRepository::new(self.db)
            .get_by_period(period)
            .await?)
    }
}

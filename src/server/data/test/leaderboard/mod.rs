use crate::server::data::leaderboard::LeaderboardRepository;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod get_by_period;

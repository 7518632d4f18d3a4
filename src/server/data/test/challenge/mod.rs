use crate::server::data::challenge::ChallengeRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_date;
mod has_attempted;

use crate::server::data::achievement::AchievementRepository;
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod award;
mod mark_read;

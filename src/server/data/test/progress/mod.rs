use crate::server::{
    data::progress::ProgressRepository, model::progress::LessonAttemptParam,
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod record_attempt;
mod record_exercise;

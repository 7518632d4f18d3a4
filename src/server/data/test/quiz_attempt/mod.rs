use crate::server::{
    data::quiz_attempt::QuizAttemptRepository, model::quiz::CreateQuizAttemptParam,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod summary;

use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateProfileParam},
};
use chrono::{Duration, NaiveDate, Utc};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_logged_in_since;
mod create;
mod set_active;
mod update_profile;
mod update_stats;

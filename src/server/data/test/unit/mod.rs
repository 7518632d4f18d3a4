use crate::server::{
    data::{lesson::LessonRepository, unit::UnitRepository},
    model::unit::{CreateUnitParams, UpdateUnitParams},
};
use entity::sea_orm_active_enums::DifficultyLevel;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

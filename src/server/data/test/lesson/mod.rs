use crate::server::{
    data::{exercise::ExerciseRepository, lesson::LessonRepository, quiz::QuizRepository},
    model::lesson::UpdateLessonParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_published_by_unit;
mod unlink_from_unit;
mod update;

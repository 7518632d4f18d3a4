use std::collections::HashSet;

use crate::server::data::exercise::ExerciseRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_lessons;
mod get_random;

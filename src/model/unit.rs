use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{exercise::PracticeExerciseDto, lesson::LessonDto};

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct UnitDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: String,
    pub order_index: i32,
    pub color_theme: Option<String>,
    pub estimated_duration: Option<i32>,
    pub lessons_count: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct CreateUnitDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<String>,
    pub order_index: Option<i32>,
    pub icon: Option<String>,
    pub color_theme: Option<String>,
    pub estimated_duration: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateUnitDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<String>,
    pub order_index: Option<i32>,
    pub icon: Option<String>,
    pub color_theme: Option<String>,
    pub estimated_duration: Option<i32>,
}

/// A lesson inside the learner's unit view.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UnitLessonDto {
    #[serde(flatten)]
    pub lesson: LessonDto,
    pub completed: bool,
    pub exercises: Vec<PracticeExerciseDto>,
}

/// A unit as seen by a learner, with completion and unlock state.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UnitProgressDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: String,
    pub order_index: i32,
    pub color_theme: Option<String>,
    pub estimated_duration: Option<i32>,
    pub lessons_count: u64,
    pub completed_lessons: u64,
    pub progress: i32,
    #[serde(rename = "isUnlocked")]
    pub is_unlocked: bool,
    pub lessons: Vec<UnitLessonDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UnitsDto {
    pub units: Vec<UnitDto>,
}

/// A created or updated unit with a confirmation message.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UnitResponseDto {
    pub message: String,
    pub unit: UnitDto,
}

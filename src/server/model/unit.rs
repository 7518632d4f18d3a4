//! Unit domain models, parameters and the learner progress view.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::DifficultyLevel;

use crate::{
    model::unit::{CreateUnitDto, UnitDto, UnitLessonDto, UnitProgressDto, UpdateUnitDto},
    server::{
        error::AppError,
        model::{exercise::Exercise, lesson::Lesson},
        util::parse::{optional_text, required_text},
    },
};

const DEFAULT_ESTIMATED_DURATION: i32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub order_index: i32,
    pub icon: Option<String>,
    pub color_theme: Option<String>,
    pub estimated_duration: Option<i32>,
    pub difficulty: DifficultyLevel,
    pub created_at: DateTime<Utc>,
}

impl Unit {
    pub fn from_entity(entity: entity::unit::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            order_index: entity.order_index,
            icon: entity.icon,
            color_theme: entity.color_theme,
            estimated_duration: entity.estimated_duration,
            difficulty: entity.difficulty,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self, lessons_count: u64) -> UnitDto {
        UnitDto {
            id: self.id,
            title: self.title,
            description: self.description,
            difficulty: self.difficulty.as_str().to_string(),
            order_index: self.order_index,
            color_theme: self.color_theme,
            estimated_duration: self.estimated_duration,
            lessons_count,
        }
    }
}

/// Parses a difficulty name case-insensitively.
pub fn parse_difficulty(value: &str) -> Result<DifficultyLevel, AppError> {
    DifficultyLevel::parse(value).ok_or_else(|| AppError::BadRequest("Invalid difficulty".to_string()))
}

#[derive(Debug, Clone)]
pub struct CreateUnitParams {
    pub title: String,
    pub description: Option<String>,
    pub difficulty: DifficultyLevel,
    pub order_index: i32,
    pub icon: Option<String>,
    pub color_theme: Option<String>,
    pub estimated_duration: i32,
}

impl CreateUnitParams {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateUnitParams)` - Title present and difficulty known (defaults to beginner)
    /// - `Err(AppError::BadRequest)` - Missing title or unknown difficulty
    pub fn from_dto(dto: CreateUnitDto) -> Result<Self, AppError> {
        let title = required_text(dto.title.as_deref(), "title")?;
        let difficulty = match dto.difficulty.as_deref() {
            Some(d) => parse_difficulty(d)?,
            None => DifficultyLevel::Beginner,
        };

        Ok(Self {
            title,
            description: optional_text(dto.description),
            difficulty,
            order_index: dto.order_index.unwrap_or(1),
            icon: optional_text(dto.icon),
            color_theme: optional_text(dto.color_theme),
            estimated_duration: dto.estimated_duration.unwrap_or(DEFAULT_ESTIMATED_DURATION),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateUnitParams {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<DifficultyLevel>,
    pub order_index: Option<i32>,
    pub icon: Option<String>,
    pub color_theme: Option<String>,
    pub estimated_duration: Option<i32>,
}

impl UpdateUnitParams {
    pub fn from_dto(id: i32, dto: UpdateUnitDto) -> Result<Self, AppError> {
        let title = match dto.title {
            Some(t) => Some(required_text(Some(&t), "title")?),
            None => None,
        };
        let difficulty = dto.difficulty.as_deref().map(parse_difficulty).transpose()?;

        Ok(Self {
            id,
            title,
            description: dto.description,
            difficulty,
            order_index: dto.order_index,
            icon: dto.icon,
            color_theme: dto.color_theme,
            estimated_duration: dto.estimated_duration,
        })
    }
}

/// Lesson inside a learner's unit view.
#[derive(Debug, Clone)]
pub struct UnitLesson {
    pub lesson: Lesson,
    pub completed: bool,
    pub exercises: Vec<Exercise>,
}

/// Unit with the caller's completion percentage and unlock state.
#[derive(Debug, Clone)]
pub struct UnitProgress {
    pub unit: Unit,
    pub lessons: Vec<UnitLesson>,
    pub completed_lessons: u64,
    pub progress: i32,
    pub is_unlocked: bool,
}

impl UnitProgress {
    pub fn into_dto(self) -> UnitProgressDto {
        UnitProgressDto {
            id: self.unit.id,
            title: self.unit.title,
            description: self.unit.description,
            difficulty: self.unit.difficulty.as_str().to_string(),
            order_index: self.unit.order_index,
            color_theme: self.unit.color_theme,
            estimated_duration: self.unit.estimated_duration,
            lessons_count: self.lessons.len() as u64,
            completed_lessons: self.completed_lessons,
            progress: self.progress,
            is_unlocked: self.is_unlocked,
            lessons: self
                .lessons
                .into_iter()
                .map(|l| UnitLessonDto {
                    lesson: l.lesson.into_dto(),
                    completed: l.completed,
                    exercises: l.exercises.into_iter().map(|e| e.into_practice_dto()).collect(),
                })
                .collect(),
        }
    }
}

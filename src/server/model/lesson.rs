//! Lesson domain model and parameters.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::lesson::{LessonDto, LessonInputDto},
    server::{error::AppError, util::parse::required_text},
};

const DEFAULT_LESSON_XP: i32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: i32,
    pub unit_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub content_json: Value,
    pub difficulty: String,
    pub order_index: i32,
    pub xp_reward: i32,
    pub estimated_time: Option<i32>,
    pub learning_objectives: Option<Value>,
    pub prerequisites: Option<Value>,
    pub vedic_sutras: Option<Value>,
    pub thumbnail_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_published: bool,
}

impl Lesson {
    pub fn from_entity(entity: entity::lesson::Model) -> Self {
        Self {
            id: entity.id,
            unit_id: entity.unit_id,
            title: entity.title,
            description: entity.description,
            content_json: entity.content_json,
            difficulty: entity.difficulty,
            order_index: entity.order_index,
            xp_reward: entity.xp_reward,
            estimated_time: entity.estimated_time,
            learning_objectives: entity.learning_objectives,
            prerequisites: entity.prerequisites,
            vedic_sutras: entity.vedic_sutras,
            thumbnail_image: entity.thumbnail_image,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            is_published: entity.is_published,
        }
    }

    pub fn into_dto(self) -> LessonDto {
        LessonDto {
            id: self.id,
            unit_id: self.unit_id,
            title: self.title,
            description: self.description,
            content_json: self.content_json,
            difficulty: self.difficulty,
            order_index: self.order_index,
            xp_reward: self.xp_reward,
            estimated_time: self.estimated_time,
            learning_objectives: self.learning_objectives,
            prerequisites: self.prerequisites,
            vedic_sutras: self.vedic_sutras,
            thumbnail_image: self.thumbnail_image,
            created_at: self.created_at,
            updated_at: self.updated_at,
            is_published: self.is_published,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLessonParams {
    pub unit_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub content_json: Value,
    pub difficulty: String,
    pub order_index: i32,
    pub xp_reward: i32,
    pub estimated_time: Option<i32>,
    pub learning_objectives: Option<Value>,
    pub prerequisites: Option<Value>,
    pub vedic_sutras: Option<Value>,
    pub thumbnail_image: Option<String>,
    pub is_published: bool,
}

impl CreateLessonParams {
    /// Validates a create request; `title` and `difficulty` are required.
    pub fn from_dto(dto: LessonInputDto) -> Result<Self, AppError> {
        let title = required_text(dto.title.as_deref(), "title")?;
        let difficulty = required_text(dto.difficulty.as_deref(), "difficulty")?;

        Ok(Self {
            unit_id: dto.unit_id,
            title,
            description: dto.description,
            content_json: dto
                .content_json
                .unwrap_or_else(|| Value::Object(Default::default())),
            difficulty,
            order_index: dto.order_index.unwrap_or(1),
            xp_reward: dto.xp_reward.unwrap_or(DEFAULT_LESSON_XP),
            estimated_time: dto.estimated_time,
            learning_objectives: dto.learning_objectives,
            prerequisites: dto.prerequisites,
            vedic_sutras: dto.vedic_sutras,
            thumbnail_image: dto.thumbnail_image,
            is_published: dto.is_published.unwrap_or(true),
        })
    }
}

/// Partial lesson update. `None` leaves a field untouched.
#[derive(Debug, Clone)]
pub struct UpdateLessonParams {
    pub id: i32,
    pub unit_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content_json: Option<Value>,
    pub difficulty: Option<String>,
    pub order_index: Option<i32>,
    pub xp_reward: Option<i32>,
    pub estimated_time: Option<i32>,
    pub learning_objectives: Option<Value>,
    pub prerequisites: Option<Value>,
    pub vedic_sutras: Option<Value>,
    pub thumbnail_image: Option<String>,
    pub is_published: Option<bool>,
}

impl UpdateLessonParams {
    pub fn from_dto(id: i32, dto: LessonInputDto) -> Result<Self, AppError> {
        let title = match dto.title {
            Some(t) => Some(required_text(Some(&t), "title")?),
            None => None,
        };
        let difficulty = match dto.difficulty {
            Some(d) => Some(required_text(Some(&d), "difficulty")?),
            None => None,
        };

        Ok(Self {
            id,
            unit_id: dto.unit_id,
            title,
            description: dto.description,
            content_json: dto.content_json,
            difficulty,
            order_index: dto.order_index,
            xp_reward: dto.xp_reward,
            estimated_time: dto.estimated_time,
            learning_objectives: dto.learning_objectives,
            prerequisites: dto.prerequisites,
            vedic_sutras: dto.vedic_sutras,
            thumbnail_image: dto.thumbnail_image,
            is_published: dto.is_published,
        })
    }
}

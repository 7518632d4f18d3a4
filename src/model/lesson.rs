use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct LessonDto {
    pub id: i32,
    pub unit_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = Object)]
    pub content_json: serde_json::Value,
    pub difficulty: String,
    #[serde(rename = "order")]
    pub order_index: i32,
    pub xp_reward: i32,
    pub estimated_time: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub learning_objectives: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub prerequisites: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub vedic_sutras: Option<serde_json::Value>,
    pub thumbnail_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_published: bool,
}

/// Lesson body for create and update. Every field is optional on update.
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct LessonInputDto {
    pub unit_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub content_json: Option<serde_json::Value>,
    pub difficulty: Option<String>,
    #[serde(alias = "order")]
    pub order_index: Option<i32>,
    pub xp_reward: Option<i32>,
    pub estimated_time: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub learning_objectives: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub prerequisites: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub vedic_sutras: Option<serde_json::Value>,
    pub thumbnail_image: Option<String>,
    pub is_published: Option<bool>,
}

/// Published lesson listed for a learner.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LearnerLessonDto {
    #[serde(flatten)]
    pub lesson: LessonDto,
    pub completed: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LessonsDto {
    pub lessons: Vec<LessonDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LessonResponseDto {
    pub message: String,
    pub lesson: LessonDto,
}

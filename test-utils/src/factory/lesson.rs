//! Lesson factory for creating lessons with optional unit membership.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test lessons.
///
/// # Example
///
/// ```rust,ignore
/// let lesson = LessonFactory::new(&db)
///     .unit_id(unit.id)
///     .order_index(3)
///     .xp_reward(80)
///     .build()
///     .await?;
/// ```
pub struct LessonFactory<'a> {
    db: &'a DatabaseConnection,
    unit_id: Option<i32>,
    title: String,
    difficulty: String,
    order_index: i32,
    xp_reward: i32,
    is_published: bool,
}

impl<'a> LessonFactory<'a> {
    /// Defaults: no unit, title `"Lesson {id}"`, beginner, order 1, 50 XP, published.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            unit_id: None,
            title: format!("Lesson {}", id),
            difficulty: "beginner".to_string(),
            order_index: 1,
            xp_reward: 50,
            is_published: true,
        }
    }

    pub fn unit_id(mut self, unit_id: i32) -> Self {
        self.unit_id = Some(unit_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn order_index(mut self, order_index: i32) -> Self {
        self.order_index = order_index;
        self
    }

    pub fn xp_reward(mut self, xp_reward: i32) -> Self {
        self.xp_reward = xp_reward;
        self
    }

    pub fn is_published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub async fn build(self) -> Result<entity::lesson::Model, DbErr> {
        let now = Utc::now();
        entity::lesson::ActiveModel {
            unit_id: ActiveValue::Set(self.unit_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            content_json: ActiveValue::Set(serde_json::json!({})),
            difficulty: ActiveValue::Set(self.difficulty),
            order_index: ActiveValue::Set(self.order_index),
            xp_reward: ActiveValue::Set(self.xp_reward),
            estimated_time: ActiveValue::Set(Some(15)),
            learning_objectives: ActiveValue::Set(None),
            prerequisites: ActiveValue::Set(None),
            vedic_sutras: ActiveValue::Set(None),
            thumbnail_image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            is_published: ActiveValue::Set(self.is_published),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a standalone lesson with default values.
pub async fn create_lesson(db: &DatabaseConnection) -> Result<entity::lesson::Model, DbErr> {
    LessonFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::helpers::create_unit_with_lessons};

    #[tokio::test]
    async fn creates_unit_with_ordered_lessons() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_content_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (unit, lessons) = create_unit_with_lessons(db, 3).await?;

        assert_eq!(lessons.len(), 3);
        assert!(lessons.iter().all(|l| l.unit_id == Some(unit.id)));
        assert_eq!(
            lessons.iter().map(|l| l.order_index).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        Ok(())
    }
}

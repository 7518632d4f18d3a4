//! Unit factory for creating curriculum units.

use chrono::Utc;
use entity::sea_orm_active_enums::DifficultyLevel;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test units.
pub struct UnitFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    order_index: i32,
    difficulty: DifficultyLevel,
}

impl<'a> UnitFactory<'a> {
    /// Defaults: title `"Unit {id}"`, order index 1, beginner.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Unit {}", id),
            order_index: 1,
            difficulty: DifficultyLevel::Beginner,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn order_index(mut self, order_index: i32) -> Self {
        self.order_index = order_index;
        self
    }

    pub fn difficulty(mut self, difficulty: DifficultyLevel) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub async fn build(self) -> Result<entity::unit::Model, DbErr> {
        entity::unit::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            order_index: ActiveValue::Set(self.order_index),
            icon: ActiveValue::Set(None),
            color_theme: ActiveValue::Set(None),
            estimated_duration: ActiveValue::Set(Some(60)),
            difficulty: ActiveValue::Set(self.difficulty),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a unit with default values.
pub async fn create_unit(db: &DatabaseConnection) -> Result<entity::unit::Model, DbErr> {
    UnitFactory::new(db).build().await
}

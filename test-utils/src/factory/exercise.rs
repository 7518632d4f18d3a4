//! Exercise factory for creating practice questions.

use chrono::Utc;
use entity::sea_orm_active_enums::DifficultyLevel;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test exercises.
pub struct ExerciseFactory<'a> {
    db: &'a DatabaseConnection,
    lesson_id: Option<i32>,
    question: String,
    correct_answer: String,
    xp_reward: i32,
    options: Option<String>,
}

impl<'a> ExerciseFactory<'a> {
    /// Defaults: no lesson, question `"What is {id} + {id}?"` with the matching answer, 10 XP.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            lesson_id: None,
            question: format!("What is {} + {}?", id, id),
            correct_answer: (id * 2).to_string(),
            xp_reward: 10,
            options: None,
        }
    }

    pub fn lesson_id(mut self, lesson_id: i32) -> Self {
        self.lesson_id = Some(lesson_id);
        self
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn correct_answer(mut self, correct_answer: impl Into<String>) -> Self {
        self.correct_answer = correct_answer.into();
        self
    }

    pub fn xp_reward(mut self, xp_reward: i32) -> Self {
        self.xp_reward = xp_reward;
        self
    }

    /// Sets the options, stored one per line.
    pub fn options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.join("\n"));
        self
    }

    pub async fn build(self) -> Result<entity::exercise::Model, DbErr> {
        entity::exercise::ActiveModel {
            lesson_id: ActiveValue::Set(self.lesson_id),
            question: ActiveValue::Set(self.question),
            correct_answer: ActiveValue::Set(self.correct_answer),
            explanation: ActiveValue::Set(None),
            difficulty: ActiveValue::Set(DifficultyLevel::Beginner),
            xp_reward: ActiveValue::Set(self.xp_reward),
            question_type: ActiveValue::Set("multiple_choice".to_string()),
            options: ActiveValue::Set(self.options),
            hints: ActiveValue::Set(None),
            step_by_step_solution: ActiveValue::Set(None),
            time_limit: ActiveValue::Set(None),
            tags: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an exercise with default values.
pub async fn create_exercise(db: &DatabaseConnection) -> Result<entity::exercise::Model, DbErr> {
    ExerciseFactory::new(db).build().await
}

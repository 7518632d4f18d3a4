//! Quiz and quiz question factories.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test quizzes.
pub struct QuizFactory<'a> {
    db: &'a DatabaseConnection,
    lesson_id: Option<i32>,
    title: String,
    time_limit: i32,
    max_attempts: i32,
    passing_score: i32,
    xp_reward: i32,
}

impl<'a> QuizFactory<'a> {
    /// Defaults: no lesson, 10 minutes, 3 attempts, pass at 70, 100 XP.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            lesson_id: None,
            title: format!("Quiz {}", id),
            time_limit: 10,
            max_attempts: 3,
            passing_score: 70,
            xp_reward: 100,
        }
    }

    pub fn lesson_id(mut self, lesson_id: i32) -> Self {
        self.lesson_id = Some(lesson_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn max_attempts(mut self, max_attempts: i32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn passing_score(mut self, passing_score: i32) -> Self {
        self.passing_score = passing_score;
        self
    }

    pub fn xp_reward(mut self, xp_reward: i32) -> Self {
        self.xp_reward = xp_reward;
        self
    }

    pub async fn build(self) -> Result<entity::quiz::Model, DbErr> {
        entity::quiz::ActiveModel {
            lesson_id: ActiveValue::Set(self.lesson_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            time_limit: ActiveValue::Set(self.time_limit),
            max_attempts: ActiveValue::Set(self.max_attempts),
            passing_score: ActiveValue::Set(self.passing_score),
            xp_reward: ActiveValue::Set(self.xp_reward),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Factory for creating questions belonging to a quiz.
pub struct QuizQuestionFactory<'a> {
    db: &'a DatabaseConnection,
    quiz_id: i32,
    question: String,
    options: Option<String>,
    correct_answer: String,
    points: i32,
    order_index: i32,
}

impl<'a> QuizQuestionFactory<'a> {
    /// Defaults: answer `"42"` worth 10 points, options "40", "42", "44".
    pub fn new(db: &'a DatabaseConnection, quiz_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            quiz_id,
            question: format!("Question {}", id),
            options: Some("40\n42\n44".to_string()),
            correct_answer: "42".to_string(),
            points: 10,
            order_index: 1,
        }
    }

    pub fn correct_answer(mut self, correct_answer: impl Into<String>) -> Self {
        self.correct_answer = correct_answer.into();
        self
    }

    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn order_index(mut self, order_index: i32) -> Self {
        self.order_index = order_index;
        self
    }

    pub async fn build(self) -> Result<entity::quiz_question::Model, DbErr> {
        entity::quiz_question::ActiveModel {
            quiz_id: ActiveValue::Set(self.quiz_id),
            question: ActiveValue::Set(self.question),
            question_type: ActiveValue::Set("multiple_choice".to_string()),
            options: ActiveValue::Set(self.options),
            correct_answer: ActiveValue::Set(self.correct_answer),
            explanation: ActiveValue::Set(None),
            points: ActiveValue::Set(self.points),
            order_index: ActiveValue::Set(self.order_index),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a standalone quiz with default values.
pub async fn create_quiz(db: &DatabaseConnection) -> Result<entity::quiz::Model, DbErr> {
    QuizFactory::new(db).build().await
}

/// Creates a question on the given quiz with default values.
pub async fn create_quiz_question(
    db: &DatabaseConnection,
    quiz_id: i32,
) -> Result<entity::quiz_question::Model, DbErr> {
    QuizQuestionFactory::new(db, quiz_id).build().await
}

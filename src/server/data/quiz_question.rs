//! Quiz question data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::quiz::{
    CreateQuizQuestionParams, QuizQuestion, UpdateQuizQuestionParams,
};

pub struct QuizQuestionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizQuestionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateQuizQuestionParams) -> Result<QuizQuestion, DbErr> {
        let entity = entity::quiz_question::ActiveModel {
            quiz_id: ActiveValue::Set(params.quiz_id),
            question: ActiveValue::Set(params.question),
            question_type: ActiveValue::Set(params.question_type),
            options: ActiveValue::Set(params.options),
            correct_answer: ActiveValue::Set(params.correct_answer),
            explanation: ActiveValue::Set(params.explanation),
            points: ActiveValue::Set(params.points),
            order_index: ActiveValue::Set(params.order_index),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(QuizQuestion::from_entity(entity))
    }

    /// Gets all questions, optionally restricted to one quiz, ordered by quiz then position
    pub async fn get_all(&self, quiz_id: Option<i32>) -> Result<Vec<QuizQuestion>, DbErr> {
        let mut query = entity::prelude::QuizQuestion::find();
        if let Some(quiz_id) = quiz_id {
            query = query.filter(entity::quiz_question::Column::QuizId.eq(quiz_id));
        }

        let entities = query
            .order_by_asc(entity::quiz_question::Column::QuizId)
            .order_by_asc(entity::quiz_question::Column::OrderIndex)
            .order_by_asc(entity::quiz_question::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(QuizQuestion::from_entity).collect())
    }

    /// Gets the questions of a quiz in order
    pub async fn get_by_quiz(&self, quiz_id: i32) -> Result<Vec<QuizQuestion>, DbErr> {
        self.get_all(Some(quiz_id)).await
    }

    pub async fn update(
        &self,
        params: UpdateQuizQuestionParams,
    ) -> Result<Option<QuizQuestion>, DbErr> {
        let Some(entity) = entity::prelude::QuizQuestion::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::quiz_question::ActiveModel = entity.into();
        if let Some(question) = params.question {
            active_model.question = ActiveValue::Set(question);
        }
        if let Some(question_type) = params.question_type {
            active_model.question_type = ActiveValue::Set(question_type);
        }
        if let Some(options) = params.options {
            active_model.options = ActiveValue::Set(options);
        }
        if let Some(correct_answer) = params.correct_answer {
            active_model.correct_answer = ActiveValue::Set(correct_answer);
        }
        if let Some(explanation) = params.explanation {
            active_model.explanation = ActiveValue::Set(Some(explanation));
        }
        if let Some(points) = params.points {
            active_model.points = ActiveValue::Set(points);
        }
        if let Some(order_index) = params.order_index {
            active_model.order_index = ActiveValue::Set(order_index);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(QuizQuestion::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::QuizQuestion::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

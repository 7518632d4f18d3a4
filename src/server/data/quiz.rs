//! Quiz data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::quiz::{CreateQuizParams, Quiz, UpdateQuizParams};

pub struct QuizRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateQuizParams) -> Result<Quiz, DbErr> {
        let entity = entity::quiz::ActiveModel {
            lesson_id: ActiveValue::Set(params.lesson_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            time_limit: ActiveValue::Set(params.time_limit),
            max_attempts: ActiveValue::Set(params.max_attempts),
            passing_score: ActiveValue::Set(params.passing_score),
            xp_reward: ActiveValue::Set(params.xp_reward),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Quiz::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Quiz>, DbErr> {
        let entity = entity::prelude::Quiz::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Quiz::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Quiz>, DbErr> {
        let entities = entity::prelude::Quiz::find()
            .order_by_asc(entity::quiz::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Quiz::from_entity).collect())
    }

    pub async fn update(&self, params: UpdateQuizParams) -> Result<Option<Quiz>, DbErr> {
        let Some(entity) = entity::prelude::Quiz::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::quiz::ActiveModel = entity.into();
        if let Some(lesson_id) = params.lesson_id {
            active_model.lesson_id = ActiveValue::Set(Some(lesson_id));
        }
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(time_limit) = params.time_limit {
            active_model.time_limit = ActiveValue::Set(time_limit);
        }
        if let Some(max_attempts) = params.max_attempts {
            active_model.max_attempts = ActiveValue::Set(max_attempts);
        }
        if let Some(passing_score) = params.passing_score {
            active_model.passing_score = ActiveValue::Set(passing_score);
        }
        if let Some(xp_reward) = params.xp_reward {
            active_model.xp_reward = ActiveValue::Set(xp_reward);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Quiz::from_entity(entity)))
    }

    /// Deletes a quiz together with its questions and attempts
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::QuizQuestion::delete_many()
            .filter(entity::quiz_question::Column::QuizId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::QuizAttempt::delete_many()
            .filter(entity::quiz_attempt::Column::QuizId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Quiz::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts the questions of a quiz
    pub async fn count_questions(&self, quiz_id: i32) -> Result<u64, DbErr> {
        entity::prelude::QuizQuestion::find()
            .filter(entity::quiz_question::Column::QuizId.eq(quiz_id))
            .count(self.db)
            .await
    }
}

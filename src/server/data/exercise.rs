//! Exercise data repository.

use chrono::Utc;
use rand::seq::IndexedRandom;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::exercise::{CreateExerciseParams, Exercise, UpdateExerciseParams};

pub struct ExerciseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExerciseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateExerciseParams) -> Result<Exercise, DbErr> {
        let entity = entity::exercise::ActiveModel {
            lesson_id: ActiveValue::Set(params.lesson_id),
            question: ActiveValue::Set(params.question),
            correct_answer: ActiveValue::Set(params.correct_answer),
            explanation: ActiveValue::Set(params.explanation),
            difficulty: ActiveValue::Set(params.difficulty),
            xp_reward: ActiveValue::Set(params.xp_reward),
            question_type: ActiveValue::Set(params.question_type),
            options: ActiveValue::Set(params.options),
            hints: ActiveValue::Set(params.hints),
            step_by_step_solution: ActiveValue::Set(None),
            time_limit: ActiveValue::Set(params.time_limit),
            tags: ActiveValue::Set(params.tags),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Exercise::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Exercise>, DbErr> {
        let entity = entity::prelude::Exercise::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Exercise::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Exercise>, DbErr> {
        let entities = entity::prelude::Exercise::find()
            .order_by_asc(entity::exercise::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Exercise::from_entity).collect())
    }

    /// Gets the exercises of the given lessons ordered by ID
    pub async fn get_by_lessons(&self, lesson_ids: &[i32]) -> Result<Vec<Exercise>, DbErr> {
        if lesson_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Exercise::find()
            .filter(entity::exercise::Column::LessonId.is_in(lesson_ids.iter().copied()))
            .order_by_asc(entity::exercise::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Exercise::from_entity).collect())
    }

    /// Picks up to `count` distinct exercises uniformly at random.
    ///
    /// # Returns
    /// - `Ok(Vec<Exercise>)` - Picked exercises in random order, fewer than `count` when
    ///   not enough exist
    /// - `Err(DbErr)` - Database error
    pub async fn get_random(&self, count: usize) -> Result<Vec<Exercise>, DbErr> {
        let ids: Vec<i32> = entity::prelude::Exercise::find()
            .select_only()
            .column(entity::exercise::Column::Id)
            .into_tuple()
            .all(self.db)
            .await?;

        let picked: Vec<i32> = ids
            .choose_multiple(&mut rand::rng(), count)
            .copied()
            .collect();
        if picked.is_empty() {
            return Ok(Vec::new());
        }

        let mut entities = entity::prelude::Exercise::find()
            .filter(entity::exercise::Column::Id.is_in(picked.clone()))
            .all(self.db)
            .await?;

        // Restore the random pick order
        entities.sort_by_key(|e| picked.iter().position(|id| *id == e.id));

        Ok(entities.into_iter().map(Exercise::from_entity).collect())
    }

    pub async fn update(&self, params: UpdateExerciseParams) -> Result<Option<Exercise>, DbErr> {
        let Some(entity) = entity::prelude::Exercise::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::exercise::ActiveModel = entity.into();
        if let Some(lesson_id) = params.lesson_id {
            active_model.lesson_id = ActiveValue::Set(Some(lesson_id));
        }
        if let Some(question) = params.question {
            active_model.question = ActiveValue::Set(question);
        }
        if let Some(correct_answer) = params.correct_answer {
            active_model.correct_answer = ActiveValue::Set(correct_answer);
        }
        if let Some(explanation) = params.explanation {
            active_model.explanation = ActiveValue::Set(Some(explanation));
        }
        if let Some(difficulty) = params.difficulty {
            active_model.difficulty = ActiveValue::Set(difficulty);
        }
        if let Some(question_type) = params.question_type {
            active_model.question_type = ActiveValue::Set(question_type);
        }
        if let Some(options) = params.options {
            active_model.options = ActiveValue::Set(options);
        }
        if let Some(xp_reward) = params.xp_reward {
            active_model.xp_reward = ActiveValue::Set(xp_reward);
        }
        if let Some(hints) = params.hints {
            active_model.hints = ActiveValue::Set(Some(hints));
        }
        if let Some(time_limit) = params.time_limit {
            active_model.time_limit = ActiveValue::Set(Some(time_limit));
        }
        if let Some(tags) = params.tags {
            active_model.tags = ActiveValue::Set(Some(tags));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Exercise::from_entity(entity)))
    }

    /// Deletes an exercise, returning whether it existed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Exercise::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Exercise::find().count(self.db).await
    }
}

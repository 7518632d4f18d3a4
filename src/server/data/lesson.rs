//! Lesson data repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::lesson::{CreateLessonParams, Lesson, UpdateLessonParams};

pub struct LessonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateLessonParams) -> Result<Lesson, DbErr> {
        let now = Utc::now();
        let entity = entity::lesson::ActiveModel {
            unit_id: ActiveValue::Set(params.unit_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            content_json: ActiveValue::Set(params.content_json),
            difficulty: ActiveValue::Set(params.difficulty),
            order_index: ActiveValue::Set(params.order_index),
            xp_reward: ActiveValue::Set(params.xp_reward),
            estimated_time: ActiveValue::Set(params.estimated_time),
            learning_objectives: ActiveValue::Set(params.learning_objectives),
            prerequisites: ActiveValue::Set(params.prerequisites),
            vedic_sutras: ActiveValue::Set(params.vedic_sutras),
            thumbnail_image: ActiveValue::Set(params.thumbnail_image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            is_published: ActiveValue::Set(params.is_published),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Lesson::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Lesson>, DbErr> {
        let entity = entity::prelude::Lesson::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Lesson::from_entity))
    }

    /// Gets every lesson ordered by unit then position
    pub async fn get_all(&self) -> Result<Vec<Lesson>, DbErr> {
        let entities = entity::prelude::Lesson::find()
            .order_by_asc(entity::lesson::Column::UnitId)
            .order_by_asc(entity::lesson::Column::OrderIndex)
            .order_by_asc(entity::lesson::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Lesson::from_entity).collect())
    }

    /// Gets published lessons ordered by unit then position
    pub async fn get_published(&self) -> Result<Vec<Lesson>, DbErr> {
        let entities = entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::IsPublished.eq(true))
            .order_by_asc(entity::lesson::Column::UnitId)
            .order_by_asc(entity::lesson::Column::OrderIndex)
            .order_by_asc(entity::lesson::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Lesson::from_entity).collect())
    }

    /// Gets published lessons grouped by unit ID, each group in lesson order
    pub async fn get_published_by_unit(&self) -> Result<HashMap<i32, Vec<Lesson>>, DbErr> {
        let mut grouped: HashMap<i32, Vec<Lesson>> = HashMap::new();

        for lesson in self.get_published().await? {
            if let Some(unit_id) = lesson.unit_id {
                grouped.entry(unit_id).or_default().push(lesson);
            }
        }

        Ok(grouped)
    }

    /// Gets all lessons of a unit in order
    pub async fn get_by_unit(&self, unit_id: i32) -> Result<Vec<Lesson>, DbErr> {
        let entities = entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::UnitId.eq(unit_id))
            .order_by_asc(entity::lesson::Column::OrderIndex)
            .order_by_asc(entity::lesson::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Lesson::from_entity).collect())
    }

    /// Updates the provided fields of a lesson and bumps `updated_at`
    pub async fn update(&self, params: UpdateLessonParams) -> Result<Option<Lesson>, DbErr> {
        let Some(entity) = entity::prelude::Lesson::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::lesson::ActiveModel = entity.into();
        if let Some(unit_id) = params.unit_id {
            active_model.unit_id = ActiveValue::Set(Some(unit_id));
        }
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(content_json) = params.content_json {
            active_model.content_json = ActiveValue::Set(content_json);
        }
        if let Some(difficulty) = params.difficulty {
            active_model.difficulty = ActiveValue::Set(difficulty);
        }
        if let Some(order_index) = params.order_index {
            active_model.order_index = ActiveValue::Set(order_index);
        }
        if let Some(xp_reward) = params.xp_reward {
            active_model.xp_reward = ActiveValue::Set(xp_reward);
        }
        if let Some(estimated_time) = params.estimated_time {
            active_model.estimated_time = ActiveValue::Set(Some(estimated_time));
        }
        if let Some(objectives) = params.learning_objectives {
            active_model.learning_objectives = ActiveValue::Set(Some(objectives));
        }
        if let Some(prerequisites) = params.prerequisites {
            active_model.prerequisites = ActiveValue::Set(Some(prerequisites));
        }
        if let Some(vedic_sutras) = params.vedic_sutras {
            active_model.vedic_sutras = ActiveValue::Set(Some(vedic_sutras));
        }
        if let Some(thumbnail_image) = params.thumbnail_image {
            active_model.thumbnail_image = ActiveValue::Set(Some(thumbnail_image));
        }
        if let Some(is_published) = params.is_published {
            active_model.is_published = ActiveValue::Set(is_published);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Lesson::from_entity(entity)))
    }

    /// Deletes a lesson after detaching its exercises, quizzes, sutra links and progress rows.
    ///
    /// Runs in one transaction; a failure leaves every row attached.
    ///
    /// # Returns
    /// - `Ok(true)` - Lesson deleted
    /// - `Ok(false)` - No lesson with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let detached = Expr::value(Option::<i32>::None);
        let txn = self.db.begin().await?;

        entity::prelude::Exercise::update_many()
            .col_expr(entity::exercise::Column::LessonId, detached.clone())
            .filter(entity::exercise::Column::LessonId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Quiz::update_many()
            .col_expr(entity::quiz::Column::LessonId, detached.clone())
            .filter(entity::quiz::Column::LessonId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::LessonSutra::update_many()
            .col_expr(entity::lesson_sutra::Column::LessonId, detached.clone())
            .filter(entity::lesson_sutra::Column::LessonId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::UserProgress::update_many()
            .col_expr(entity::user_progress::Column::LessonId, detached)
            .filter(entity::user_progress::Column::LessonId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Lesson::delete_by_id(id)
            .exec(&txn)
            .await?;
        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Detaches a lesson from a unit.
    ///
    /// # Returns
    /// - `Ok(true)` - Lesson was in the unit and has been detached
    /// - `Ok(false)` - Lesson does not exist or belongs to another unit
    /// - `Err(DbErr)` - Database error
    pub async fn unlink_from_unit(&self, unit_id: i32, lesson_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Lesson::update_many()
            .col_expr(
                entity::lesson::Column::UnitId,
                Expr::value(Option::<i32>::None),
            )
            .col_expr(entity::lesson::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::lesson::Column::Id.eq(lesson_id))
            .filter(entity::lesson::Column::UnitId.eq(unit_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Lesson::find().count(self.db).await
    }

    /// Counts published lessons
    pub async fn count_published(&self) -> Result<u64, DbErr> {
        entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::IsPublished.eq(true))
            .count(self.db)
            .await
    }
}

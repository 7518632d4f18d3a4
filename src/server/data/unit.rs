//! Unit data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::unit::{CreateUnitParams, Unit, UpdateUnitParams};

pub struct UnitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnitRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new unit
    pub async fn create(&self, params: CreateUnitParams) -> Result<Unit, DbErr> {
        let entity = entity::unit::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            order_index: ActiveValue::Set(params.order_index),
            icon: ActiveValue::Set(params.icon),
            color_theme: ActiveValue::Set(params.color_theme),
            estimated_duration: ActiveValue::Set(Some(params.estimated_duration)),
            difficulty: ActiveValue::Set(params.difficulty),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Unit::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Unit>, DbErr> {
        let entity = entity::prelude::Unit::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Unit::from_entity))
    }

    /// Gets all units in display order
    pub async fn get_all(&self) -> Result<Vec<Unit>, DbErr> {
        let entities = entity::prelude::Unit::find()
            .order_by_asc(entity::unit::Column::OrderIndex)
            .order_by_asc(entity::unit::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Unit::from_entity).collect())
    }

    /// Updates the provided fields of a unit, returning `None` if it does not exist
    pub async fn update(&self, params: UpdateUnitParams) -> Result<Option<Unit>, DbErr> {
        let Some(entity) = entity::prelude::Unit::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::unit::ActiveModel = entity.into();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(difficulty) = params.difficulty {
            active_model.difficulty = ActiveValue::Set(difficulty);
        }
        if let Some(order_index) = params.order_index {
            active_model.order_index = ActiveValue::Set(order_index);
        }
        if let Some(icon) = params.icon {
            active_model.icon = ActiveValue::Set(Some(icon));
        }
        if let Some(color_theme) = params.color_theme {
            active_model.color_theme = ActiveValue::Set(Some(color_theme));
        }
        if let Some(estimated_duration) = params.estimated_duration {
            active_model.estimated_duration = ActiveValue::Set(Some(estimated_duration));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Unit::from_entity(entity)))
    }

    /// Deletes a unit after detaching its lessons, in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Unit deleted
    /// - `Ok(false)` - No unit with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Lesson::update_many()
            .col_expr(
                entity::lesson::Column::UnitId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::lesson::Column::UnitId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Unit::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts lessons attached to a unit, published or not
    pub async fn count_lessons(&self, unit_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::UnitId.eq(unit_id))
            .count(self.db)
            .await
    }
}

//! Vedic sutra factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a sutra with a unique name at the given position.
pub async fn create_sutra(
    db: &DatabaseConnection,
    order_index: i32,
) -> Result<entity::vedic_sutra::Model, DbErr> {
    let id = next_id();
    entity::vedic_sutra::ActiveModel {
        name: ActiveValue::Set(format!("Sutra {}", id)),
        sanskrit_name: ActiveValue::Set(None),
        english_translation: ActiveValue::Set(Some(format!("Translation {}", id))),
        description: ActiveValue::Set(None),
        applications: ActiveValue::Set(None),
        order_index: ActiveValue::Set(order_index),
        ..Default::default()
    }
    .insert(db)
    .await
}

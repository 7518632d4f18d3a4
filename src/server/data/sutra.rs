use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::sutra::Sutra;

pub struct SutraRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SutraRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every sutra in teaching order
    pub async fn get_all(&self) -> Result<Vec<Sutra>, DbErr> {
        let entities = entity::prelude::VedicSutra::find()
            .order_by_asc(entity::vedic_sutra::Column::OrderIndex)
            .order_by_asc(entity::vedic_sutra::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Sutra::from_entity).collect())
    }
}

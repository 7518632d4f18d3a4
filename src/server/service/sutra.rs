use sea_orm::DatabaseConnection;

use crate::server::{data::sutra::SutraRepository, error::AppError, model::sutra::Sutra};

pub struct SutraService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SutraService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Sutra>, AppError> {
        Ok(SutraRepository::new(self.db).get_all().await?)
    }
}

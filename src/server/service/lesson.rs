use sea_orm::DatabaseConnection;

use crate::server::{
    data::{lesson::LessonRepository, progress::ProgressRepository, unit::UnitRepository},
    error::AppError,
    model::lesson::{CreateLessonParams, Lesson, UpdateLessonParams},
};

pub struct LessonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Lesson>, AppError> {
        Ok(LessonRepository::new(self.db).get_all().await?)
    }

    /// Creates a lesson, checking that the target unit exists when one is given
    pub async fn create(&self, params: CreateLessonParams) -> Result<Lesson, AppError> {
        if let Some(unit_id) = params.unit_id {
            self.require_unit(unit_id).await?;
        }

        let lesson = LessonRepository::new(self.db).create(params).await?;

        tracing::info!("Created lesson {} ({})", lesson.id, lesson.title);

        Ok(lesson)
    }

    pub async fn update(&self, params: UpdateLessonParams) -> Result<Lesson, AppError> {
        if let Some(unit_id) = params.unit_id {
            self.require_unit(unit_id).await?;
        }

        LessonRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Lesson not found".to_string()))
    }

    /// Deletes a lesson; exercises, quizzes and progress rows are kept but detached
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !LessonRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Lesson not found".to_string()));
        }

        tracing::info!("Deleted lesson {}", id);

        Ok(())
    }

    /// Published lessons with whether the learner has completed each one
    pub async fn list_for_learner(&self, user_id: i32) -> Result<Vec<(Lesson, bool)>, AppError> {
        let completed = ProgressRepository::new(self.db)
            .completed_lesson_ids(user_id)
            .await?;

        Ok(LessonRepository::new(self.db)
            .get_published()
            .await?
            .into_iter()
            .map(|lesson| {
                let done = completed.contains(&lesson.id);
                (lesson, done)
            })
            .collect())
    }

    async fn require_unit(&self, unit_id: i32) -> Result<(), AppError> {
        if UnitRepository::new(self.db)
            .get_by_id(unit_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Unit not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    use crate::model::lesson::LessonInputDto;

    #[tokio::test]
    async fn create_rejects_unknown_unit() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let params = CreateLessonParams::from_dto(LessonInputDto {
            unit_id: Some(404),
            title: Some("Ekadhikena Purvena".to_string()),
            difficulty: Some("beginner".to_string()),
            ..Default::default()
        })?;

        let result = LessonService::new(db).create(params).await;

        assert!(matches!(result, Err(AppError::NotFound(ref m)) if m == "Unit not found"));

        Ok(())
    }

    #[tokio::test]
    async fn learner_list_flags_completed_lessons() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let (_, lessons) = factory::create_unit_with_lessons(db, 2).await?;
        factory::lesson::LessonFactory::new(db)
            .is_published(false)
            .build()
            .await?;
        ProgressRepository::new(db)
            .record_attempt(crate::server::model::progress::LessonAttemptParam {
                user_id: user.id,
                lesson_id: lessons[1].id,
                score: 70,
                time_spent: 30,
                now: chrono::Utc::now(),
            })
            .await?;

        let listed = LessonService::new(db).list_for_learner(user.id).await?;
        let flags: Vec<(i32, bool)> = listed.iter().map(|(l, done)| (l.id, *done)).collect();

        assert_eq!(flags, vec![(lessons[0].id, false), (lessons[1].id, true)]);

        Ok(())
    }
}

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        exercise::ExerciseRepository, lesson::LessonRepository, progress::ProgressRepository,
        unit::UnitRepository,
    },
    error::AppError,
    model::{
        exercise::Exercise,
        lesson::Lesson,
        progress::{completion_percentage, unlock_flags},
        unit::{CreateUnitParams, Unit, UnitLesson, UnitProgress, UpdateUnitParams},
    },
};

pub struct UnitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnitService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every unit in display order with its lesson count
    pub async fn list(&self) -> Result<Vec<(Unit, u64)>, AppError> {
        let repo = UnitRepository::new(self.db);

        let mut units = Vec::new();
        for unit in repo.get_all().await? {
            let lessons_count = repo.count_lessons(unit.id).await?;
            units.push((unit, lessons_count));
        }

        Ok(units)
    }

    pub async fn create(&self, params: CreateUnitParams) -> Result<Unit, AppError> {
        let unit = UnitRepository::new(self.db).create(params).await?;

        tracing::info!("Created unit {} ({})", unit.id, unit.title);

        Ok(unit)
    }

    /// Updates a unit and returns it with its lesson count
    pub async fn update(&self, params: UpdateUnitParams) -> Result<(Unit, u64), AppError> {
        let repo = UnitRepository::new(self.db);

        let Some(unit) = repo.update(params).await? else {
            return Err(AppError::NotFound("Unit not found".to_string()));
        };
        let lessons_count = repo.count_lessons(unit.id).await?;

        Ok((unit, lessons_count))
    }

    /// Deletes a unit; its lessons stay and lose their unit
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UnitRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Unit not found".to_string()));
        }

        tracing::info!("Deleted unit {}", id);

        Ok(())
    }

    /// Gets all lessons of a unit, published or not
    pub async fn lessons(&self, unit_id: i32) -> Result<Vec<Lesson>, AppError> {
        self.require_unit(unit_id).await?;

        Ok(LessonRepository::new(self.db).get_by_unit(unit_id).await?)
    }

    /// Detaches a lesson from a unit without deleting it
    pub async fn unlink_lesson(&self, unit_id: i32, lesson_id: i32) -> Result<(), AppError> {
        self.require_unit(unit_id).await?;

        if !LessonRepository::new(self.db)
            .unlink_from_unit(unit_id, lesson_id)
            .await?
        {
            return Err(AppError::NotFound(
                "Lesson not found in this unit".to_string(),
            ));
        }

        Ok(())
    }

    /// Builds the learner's curriculum view.
    ///
    /// Only published lessons count. A unit's progress is the rounded share of its
    /// published lessons the learner has completed; the first unit is always unlocked and
    /// each later unit unlocks once the one before it is at 100%.
    pub async fn progress_view(&self, user_id: i32) -> Result<Vec<UnitProgress>, AppError> {
        let units = UnitRepository::new(self.db).get_all().await?;
        let mut lessons_by_unit = LessonRepository::new(self.db)
            .get_published_by_unit()
            .await?;
        let completed = ProgressRepository::new(self.db)
            .completed_lesson_ids(user_id)
            .await?;

        let lesson_ids: Vec<i32> = lessons_by_unit.values().flatten().map(|l| l.id).collect();
        let mut exercises_by_lesson: HashMap<i32, Vec<Exercise>> = HashMap::new();
        for exercise in ExerciseRepository::new(self.db)
            .get_by_lessons(&lesson_ids)
            .await?
        {
            if let Some(lesson_id) = exercise.lesson_id {
                exercises_by_lesson.entry(lesson_id).or_default().push(exercise);
            }
        }

        let mut views: Vec<UnitProgress> = units
            .into_iter()
            .map(|unit| {
                let lessons: Vec<UnitLesson> = lessons_by_unit
                    .remove(&unit.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|lesson| UnitLesson {
                        completed: completed.contains(&lesson.id),
                        exercises: exercises_by_lesson.remove(&lesson.id).unwrap_or_default(),
                        lesson,
                    })
                    .collect();
                let done = lessons.iter().filter(|l| l.completed).count();

                UnitProgress {
                    progress: completion_percentage(done, lessons.len()),
                    completed_lessons: done as u64,
                    is_unlocked: false,
                    unit,
                    lessons,
                }
            })
            .collect();

        let progress: Vec<i32> = views.iter().map(|v| v.progress).collect();
        for (view, unlocked) in views.iter_mut().zip(unlock_flags(&progress)) {
            view.is_unlocked = unlocked;
        }

        Ok(views)
    }

    async fn require_unit(&self, unit_id: i32) -> Result<Unit, AppError> {
        UnitRepository::new(self.db)
            .get_by_id(unit_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Unit not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use test_utils::{builder::TestBuilder, factory};

    use crate::server::model::progress::LessonAttemptParam;

    async fn complete(
        db: &DatabaseConnection,
        user_id: i32,
        lesson_id: i32,
    ) -> Result<(), AppError> {
        ProgressRepository::new(db)
            .record_attempt(LessonAttemptParam {
                user_id,
                lesson_id,
                score: 90,
                time_spent: 60,
                now: Utc::now(),
            })
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn progress_rounds_half_to_even() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let (_, lessons) = factory::create_unit_with_lessons(db, 8).await?;
        complete(db, user.id, lessons[0].id).await?;

        let views = UnitService::new(db).progress_view(user.id).await?;

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].completed_lessons, 1);
        assert_eq!(views[0].progress, 12);
        assert!(views[0].is_unlocked);

        Ok(())
    }

    #[tokio::test]
    async fn next_unit_unlocks_when_previous_is_complete() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let first = factory::unit::UnitFactory::new(db).order_index(1).build().await?;
        let second = factory::unit::UnitFactory::new(db).order_index(2).build().await?;
        let third = factory::unit::UnitFactory::new(db).order_index(3).build().await?;
        let only_lesson = factory::lesson::LessonFactory::new(db)
            .unit_id(first.id)
            .build()
            .await?;
        factory::lesson::LessonFactory::new(db)
            .unit_id(second.id)
            .build()
            .await?;
        factory::lesson::LessonFactory::new(db)
            .unit_id(third.id)
            .build()
            .await?;
        let service = UnitService::new(db);

        let before = service.progress_view(user.id).await?;
        let unlocked: Vec<bool> = before.iter().map(|v| v.is_unlocked).collect();
        assert_eq!(unlocked, vec![true, false, false]);

        complete(db, user.id, only_lesson.id).await?;

        let after = service.progress_view(user.id).await?;
        let unlocked: Vec<bool> = after.iter().map(|v| v.is_unlocked).collect();
        assert_eq!(after[0].progress, 100);
        assert_eq!(unlocked, vec![true, true, false]);

        Ok(())
    }

    #[tokio::test]
    async fn unpublished_lessons_do_not_count() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let unit = factory::create_unit(db).await?;
        let published = factory::lesson::LessonFactory::new(db)
            .unit_id(unit.id)
            .build()
            .await?;
        factory::lesson::LessonFactory::new(db)
            .unit_id(unit.id)
            .order_index(2)
            .is_published(false)
            .build()
            .await?;
        factory::exercise::ExerciseFactory::new(db)
            .lesson_id(published.id)
            .build()
            .await?;
        complete(db, user.id, published.id).await?;

        let views = UnitService::new(db).progress_view(user.id).await?;

        assert_eq!(views[0].lessons.len(), 1);
        assert_eq!(views[0].lessons[0].exercises.len(), 1);
        assert_eq!(views[0].progress, 100);

        Ok(())
    }

    #[tokio::test]
    async fn empty_unit_reports_zero_progress() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        factory::create_unit(db).await?;

        let views = UnitService::new(db).progress_view(user.id).await?;

        assert_eq!(views[0].progress, 0);
        assert!(views[0].lessons.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn unlink_requires_lesson_in_unit() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (unit, lessons) = factory::create_unit_with_lessons(db, 1).await?;
        let stray = factory::create_lesson(db).await?;
        let service = UnitService::new(db);

        assert!(matches!(
            service.unlink_lesson(unit.id, stray.id).await,
            Err(AppError::NotFound(_))
        ));

        service.unlink_lesson(unit.id, lessons[0].id).await?;
        assert!(service.lessons(unit.id).await?.is_empty());

        Ok(())
    }
}

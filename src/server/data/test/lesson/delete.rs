use super::*;

/// Tests deleting a lesson referenced by exercises and quizzes.
///
/// Verifies that dependent content is kept but no longer points at the lesson.
///
/// Expected: Ok(true) with exercise and quiz `lesson_id` set to NULL
#[tokio::test]
async fn detaches_dependent_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_learning_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lesson = factory::create_lesson(db).await?;
    let exercise = factory::exercise::ExerciseFactory::new(db)
        .lesson_id(lesson.id)
        .build()
        .await?;
    let quiz = factory::quiz::QuizFactory::new(db)
        .lesson_id(lesson.id)
        .build()
        .await?;

    let deleted = LessonRepository::new(db).delete(lesson.id).await?;
    assert!(deleted);

    let exercise = ExerciseRepository::new(db).get_by_id(exercise.id).await?.unwrap();
    assert!(exercise.lesson_id.is_none());
    let quiz = QuizRepository::new(db).get_by_id(quiz.id).await?.unwrap();
    assert!(quiz.lesson_id.is_none());

    Ok(())
}

/// Tests a delete that fails after some rows were already detached.
///
/// The sutra link and progress tables are missing, so the third detach statement fails.
///
/// Expected: Err, with the exercise still attached and the lesson still stored
#[tokio::test]
async fn failed_delete_leaves_content_attached() -> Result<(), DbErr> {
    use entity::prelude::{Exercise, Lesson, Quiz, Unit};

    let test = TestBuilder::new()
        .with_table(Unit)
        .with_table(Lesson)
        .with_table(Exercise)
        .with_table(Quiz)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lesson = factory::create_lesson(db).await?;
    let exercise = factory::exercise::ExerciseFactory::new(db)
        .lesson_id(lesson.id)
        .build()
        .await?;

    let result = LessonRepository::new(db).delete(lesson.id).await;
    assert!(result.is_err());

    let exercise = ExerciseRepository::new(db).get_by_id(exercise.id).await?.unwrap();
    assert_eq!(exercise.lesson_id, Some(lesson.id));
    assert!(LessonRepository::new(db).get_by_id(lesson.id).await?.is_some());

    Ok(())
}

use super::*;

/// Tests counting exercise answers on the lesson row.
///
/// Verifies that the first answer creates an incomplete row and later answers
/// increment the counters.
///
/// Expected: Ok with two answers recorded and one correct
#[tokio::test]
async fn counts_answers_on_lesson_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_learning_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let lesson = factory::create_lesson(db).await?;
    let repo = ProgressRepository::new(db);

    repo.record_exercise(user.id, lesson.id, true, Utc::now()).await?;
    repo.record_exercise(user.id, lesson.id, false, Utc::now()).await?;

    let stored = repo.get(user.id, lesson.id).await?.unwrap();
    assert_eq!(stored.exercises_completed, 2);
    assert_eq!(stored.exercises_correct, 1);
    assert_eq!(stored.attempts, 0);
    assert!(!stored.completed);

    Ok(())
}

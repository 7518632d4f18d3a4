use super::*;

fn attempt(user_id: i32, lesson_id: i32, score: i32) -> LessonAttemptParam {
    LessonAttemptParam {
        user_id,
        lesson_id,
        score,
        time_spent: 120,
        now: Utc::now(),
    }
}

/// Tests a first attempt that passes the lesson.
///
/// Expected: Ok with a new completed row and `newly_completed` true
#[tokio::test]
async fn first_passing_attempt_completes_lesson() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_learning_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let lesson = factory::create_lesson(db).await?;

    let (progress, newly_completed) = ProgressRepository::new(db)
        .record_attempt(attempt(user.id, lesson.id, 80))
        .await?;

    assert!(newly_completed);
    assert!(progress.completed);
    assert!(progress.completion_date.is_some());
    assert_eq!(progress.attempts, 1);
    assert_eq!(progress.score, Some(80));

    Ok(())
}

/// Tests revisiting a lesson after failing it.
///
/// Verifies that the row is merged rather than duplicated: attempts increase, time
/// accumulates and the best score is kept.
///
/// Expected: Ok with two attempts and completion on the second
#[tokio::test]
async fn merges_repeated_attempts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_learning_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let lesson = factory::create_lesson(db).await?;
    let repo = ProgressRepository::new(db);

    let (first, first_completed) = repo.record_attempt(attempt(user.id, lesson.id, 40)).await?;
    assert!(!first_completed);
    assert!(!first.completed);

    let (second, second_completed) =
        repo.record_attempt(attempt(user.id, lesson.id, 90)).await?;
    assert!(second_completed);
    assert_eq!(second.id, first.id);
    assert_eq!(second.attempts, 2);
    assert_eq!(second.time_spent, Some(240));

    let (third, third_completed) = repo.record_attempt(attempt(user.id, lesson.id, 70)).await?;
    assert!(!third_completed);
    assert_eq!(third.score, Some(90));

    let stored = repo.get(user.id, lesson.id).await?.unwrap();
    assert_eq!(stored.attempts, 3);
    assert!(stored.completed);

    Ok(())
}

/// Tests that completed lessons are reported per user.
///
/// Expected: Ok with only the passed lesson in the set
#[tokio::test]
async fn lists_completed_lessons() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_learning_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let passed = factory::create_lesson(db).await?;
    let failed = factory::create_lesson(db).await?;
    let repo = ProgressRepository::new(db);

    repo.record_attempt(attempt(user.id, passed.id, 65)).await?;
    repo.record_attempt(attempt(user.id, failed.id, 64)).await?;
    repo.record_attempt(attempt(other.id, failed.id, 100)).await?;

    let completed = repo.completed_lesson_ids(user.id).await?;

    assert_eq!(completed.len(), 1);
    assert!(completed.contains(&passed.id));

    Ok(())
}

use super::*;

fn attempt(user_id: i32, quiz_id: i32, score: i32, is_passed: bool) -> CreateQuizAttemptParam {
    let now = Utc::now();
    CreateQuizAttemptParam {
        user_id,
        quiz_id,
        score,
        time_taken: 90,
        answers: "{}".to_string(),
        started_at: now - Duration::seconds(90),
        completed_at: now,
        is_passed,
    }
}

/// Tests summarising attempts at one quiz.
///
/// Expected: Ok with the attempt count, best score and passed flag
#[tokio::test]
async fn summarises_attempts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_learning_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let quiz = factory::create_quiz(db).await?;
    let repo = QuizAttemptRepository::new(db);

    repo.create(attempt(user.id, quiz.id, 50, false)).await?;
    repo.create(attempt(user.id, quiz.id, 80, true)).await?;

    let summary = repo.summary(user.id, quiz.id).await?;

    assert_eq!(summary.attempts_used, 2);
    assert_eq!(summary.best_score, Some(80));
    assert!(summary.is_passed);

    Ok(())
}

/// Tests the summary of a quiz never attempted.
///
/// Expected: Ok with zero attempts and no best score
#[tokio::test]
async fn empty_summary_without_attempts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_learning_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let quiz = factory::create_quiz(db).await?;

    let summary = QuizAttemptRepository::new(db).summary(user.id, quiz.id).await?;

    assert_eq!(summary.attempts_used, 0);
    assert_eq!(summary.best_score, None);
    assert!(!summary.is_passed);

    Ok(())
}

/// Tests counting perfect attempts and distinct passed quizzes.
///
/// Expected: Ok with one perfect score and two passed quizzes
#[tokio::test]
async fn counts_perfect_and_passed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_learning_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_quiz(db).await?;
    let second = factory::create_quiz(db).await?;
    let repo = QuizAttemptRepository::new(db);

    repo.create(attempt(user.id, first.id, 100, true)).await?;
    repo.create(attempt(user.id, first.id, 90, true)).await?;
    repo.create(attempt(user.id, second.id, 75, true)).await?;

    assert_eq!(repo.count_perfect(user.id).await?, 1);
    assert_eq!(repo.count_passed_quizzes(user.id).await?, 2);

    Ok(())
}

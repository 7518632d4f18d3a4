use super::*;

/// Tests finding the challenge of a given day.
///
/// Expected: Ok(Some) for today and Ok(None) for tomorrow
#[tokio::test]
async fn finds_challenge_for_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_learning_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();
    let created = factory::create_daily_challenge(db).await?;
    let repo = ChallengeRepository::new(db);

    let found = repo.get_by_date(today).await?.unwrap();
    assert_eq!(found.id, created.id);
    assert!(repo.get_by_date(today + Duration::days(1)).await?.is_none());

    Ok(())
}

/// Tests the unique challenge date.
///
/// Expected: Err when a second challenge is created for the same day
#[tokio::test]
async fn rejects_second_challenge_on_same_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_learning_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_daily_challenge(db).await?;
    let result = factory::create_daily_challenge(db).await;

    assert!(result.is_err());

    Ok(())
}

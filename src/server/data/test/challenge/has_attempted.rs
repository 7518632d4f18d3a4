use super::*;

/// Tests recording an attempt at a challenge.
///
/// Expected: Ok(false) before and Ok(true) after the attempt, per user
#[tokio::test]
async fn tracks_attempt_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_learning_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let challenge = factory::create_daily_challenge(db).await?;
    let repo = ChallengeRepository::new(db);

    assert!(!repo.has_attempted(user.id, challenge.id).await?);

    repo.create_attempt(user.id, challenge.id, "144".to_string(), true, Some(20), Utc::now())
        .await?;

    assert!(repo.has_attempted(user.id, challenge.id).await?);
    assert!(!repo.has_attempted(other.id, challenge.id).await?);

    Ok(())
}

use super::*;

/// Tests counting users active since a cutoff.
///
/// Verifies that users who never logged in or logged in before the cutoff are
/// excluded.
///
/// Expected: Ok(1)
#[tokio::test]
async fn counts_only_recent_logins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let recent = factory::create_user(db).await?;
    let stale = factory::create_user(db).await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let now = Utc::now();
    repo.update_last_login(recent.id, now).await?;
    repo.update_last_login(stale.id, now - Duration::days(3)).await?;

    let count = repo.count_logged_in_since(now - Duration::hours(1)).await?;

    assert_eq!(count, 1);
    assert_eq!(repo.count().await?, 3);

    Ok(())
}

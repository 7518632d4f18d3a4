use super::*;

/// Tests deactivating a user.
///
/// Expected: Ok with the returned user inactive and the change persisted
#[tokio::test]
async fn deactivates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo.set_active(created.id, false).await?.unwrap();
    assert!(!updated.is_active);

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert!(!stored.is_active);

    Ok(())
}

/// Tests toggling a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.set_active(999, false).await?.is_none());
    assert!(repo.set_role(999, UserRole::Admin).await?.is_none());

    Ok(())
}

/// Tests promoting a learner to admin.
///
/// Expected: Ok with the role persisted as admin
#[tokio::test]
async fn changes_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.set_role(created.id, UserRole::Admin).await?;

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert!(stored.is_admin());

    Ok(())
}

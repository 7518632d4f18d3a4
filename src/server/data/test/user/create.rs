use super::*;

fn param(username: &str, email: Option<&str>) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        email: email.map(str::to_string),
        password_hash: "$argon2id$placeholder".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2012, 5, 14).unwrap(),
        grade_qualification: "Grade 7".to_string(),
        role: UserRole::Learner,
    }
}

/// Tests creating a new learner account.
///
/// Verifies that the repository stores the registration data and starts the
/// gamification counters at level 1 with no XP.
///
/// Expected: Ok with an active learner at level 1
#[tokio::test]
async fn creates_user_with_fresh_stats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("meera", Some("meera@example.com"))).await?;

    assert_eq!(user.username, "meera");
    assert_eq!(user.email.as_deref(), Some("meera@example.com"));
    assert_eq!(user.role, UserRole::Learner);
    assert!(user.is_active);
    assert_eq!(user.stats.total_xp, 0);
    assert_eq!(user.stats.current_level, 1);
    assert!(user.last_login.is_none());

    Ok(())
}

/// Tests the username uniqueness constraint.
///
/// Verifies that inserting a second account with an existing username fails at
/// the database level.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("meera", None)).await?;
    let result = repo.create(param("meera", None)).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that several accounts may leave their email empty.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_multiple_users_without_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("first", None)).await?;
    repo.create(param("second", None)).await?;

    assert!(repo.find_by_username("first").await?.is_some());
    assert!(repo.find_by_username("second").await?.is_some());
    assert!(repo.find_by_username("third").await?.is_none());

    Ok(())
}

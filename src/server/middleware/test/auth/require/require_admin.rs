use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let admin = factory::create_admin(db).await?;
    let headers = bearer(&tokens.issue(&load(db, admin.id).await)?);

    let user = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert!(user.is_admin());

    Ok(())
}

/// Tests learner is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied) carrying the learner's ID
#[tokio::test]
async fn denies_access_to_learner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let learner = factory::create_user(db).await?;
    let headers = bearer(&tokens.issue(&load(db, learner.id).await)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, learner.id)
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests that the role is read from the database, not from the token.
///
/// Verifies that a learner promoted after the token was issued passes the admin
/// check without logging in again.
///
/// Expected: Ok(User)
#[tokio::test]
async fn uses_current_role_from_database() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let learner = factory::create_user(db).await?;
    let headers = bearer(&tokens.issue(&load(db, learner.id).await)?);
    UserRepository::new(db)
        .set_role(learner.id, UserRole::Admin)
        .await?;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(result.is_ok());

    Ok(())
}

use super::*;

mod require_admin;
mod require_token;

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any authenticated
/// active user is granted access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let created = factory::create_user(db).await?;
    let token = tokens.issue(&load(db, created.id).await)?;
    let headers = bearer(&token);

    let user = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(user.id, created.id);

    Ok(())
}

/// Tests a token without the `Bearer ` prefix.
///
/// Expected: Ok(User), the raw token is accepted
#[tokio::test]
async fn accepts_raw_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let created = factory::create_user(db).await?;
    let token = tokens.issue(&load(db, created.id).await)?;
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(&token).unwrap());

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(result.is_ok());

    Ok(())
}

use super::*;

/// Tests updating only the grade of a profile.
///
/// Verifies that fields left as `None` keep their stored values.
///
/// Expected: Ok with the new grade and the original email
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo
        .update_profile(
            created.id,
            UpdateProfileParam {
                email: None,
                grade_qualification: Some("Grade 9".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.grade_qualification, "Grade 9");
    assert_eq!(updated.email, created.email);

    Ok(())
}

/// Tests clearing the email of a profile.
///
/// Expected: Ok with the email stored as NULL
#[tokio::test]
async fn clears_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo
        .update_profile(
            created.id,
            UpdateProfileParam {
                email: Some(None),
                grade_qualification: None,
            },
        )
        .await?
        .unwrap();

    assert!(updated.email.is_none());

    Ok(())
}

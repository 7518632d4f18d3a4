use super::*;

/// Tests a partial unit update.
///
/// Expected: Ok with the changed fields updated and the rest kept
#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_unit(db).await?;
    let repo = UnitRepository::new(db);

    let updated = repo
        .update(UpdateUnitParams {
            id: created.id,
            title: None,
            description: None,
            difficulty: Some(DifficultyLevel::Advanced),
            order_index: Some(9),
            icon: None,
            color_theme: None,
            estimated_duration: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, created.title);
    assert_eq!(updated.difficulty, DifficultyLevel::Advanced);
    assert_eq!(updated.order_index, 9);

    Ok(())
}

/// Tests updating a unit that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UnitRepository::new(db)
        .update(UpdateUnitParams {
            id: 404,
            title: Some("Ghost".to_string()),
            description: None,
            difficulty: None,
            order_index: None,
            icon: None,
            color_theme: None,
            estimated_duration: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

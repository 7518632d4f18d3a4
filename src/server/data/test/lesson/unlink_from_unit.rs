use super::*;

/// Tests unlinking a lesson from its unit.
///
/// Expected: Ok(true) and the lesson no longer belongs to the unit
#[tokio::test]
async fn unlinks_lesson_in_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (unit, lessons) = factory::create_unit_with_lessons(db, 2).await?;
    let repo = LessonRepository::new(db);

    assert!(repo.unlink_from_unit(unit.id, lessons[0].id).await?);

    let remaining = repo.get_by_unit(unit.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, lessons[1].id);

    Ok(())
}

/// Tests unlinking a lesson that belongs to a different unit.
///
/// Expected: Ok(false) and the lesson keeps its unit
#[tokio::test]
async fn ignores_lesson_from_other_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (unit, lessons) = factory::create_unit_with_lessons(db, 1).await?;
    let other = factory::create_unit(db).await?;
    let repo = LessonRepository::new(db);

    assert!(!repo.unlink_from_unit(other.id, lessons[0].id).await?);

    let stored = repo.get_by_id(lessons[0].id).await?.unwrap();
    assert_eq!(stored.unit_id, Some(unit.id));

    Ok(())
}

use super::*;

/// Tests deleting a unit that still has lessons.
///
/// Verifies that the lessons survive the delete and are detached from the unit.
///
/// Expected: Ok(true) with every lesson's `unit_id` set to NULL
#[tokio::test]
async fn detaches_lessons_before_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (unit, lessons) = factory::create_unit_with_lessons(db, 3).await?;

    let deleted = UnitRepository::new(db).delete(unit.id).await?;
    assert!(deleted);

    let lesson_repo = LessonRepository::new(db);
    for lesson in lessons {
        let stored = lesson_repo.get_by_id(lesson.id).await?.unwrap();
        assert!(stored.unit_id.is_none());
    }
    assert!(UnitRepository::new(db).get_by_id(unit.id).await?.is_none());

    Ok(())
}

/// Tests deleting a unit that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UnitRepository::new(db).delete(404).await?);

    Ok(())
}

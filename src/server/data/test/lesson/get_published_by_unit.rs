use super::*;

/// Tests grouping published lessons by unit.
///
/// Verifies that unpublished lessons and lessons without a unit are left out and that
/// each group keeps lesson order.
///
/// Expected: Ok with one group holding the two published lessons in order
#[tokio::test]
async fn groups_published_lessons_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = factory::create_unit(db).await?;
    let second = factory::lesson::LessonFactory::new(db)
        .unit_id(unit.id)
        .order_index(2)
        .build()
        .await?;
    let first = factory::lesson::LessonFactory::new(db)
        .unit_id(unit.id)
        .order_index(1)
        .build()
        .await?;
    factory::lesson::LessonFactory::new(db)
        .unit_id(unit.id)
        .order_index(3)
        .is_published(false)
        .build()
        .await?;
    factory::create_lesson(db).await?;

    let grouped = LessonRepository::new(db).get_published_by_unit().await?;

    assert_eq!(grouped.len(), 1);
    let ids: Vec<i32> = grouped[&unit.id].iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

use super::*;

/// Tests that updating a lesson bumps `updated_at`.
///
/// Expected: Ok with the new title and `updated_at` not before the original
#[tokio::test]
async fn updates_title_and_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_lesson(db).await?;

    let updated = LessonRepository::new(db)
        .update(UpdateLessonParams {
            id: created.id,
            unit_id: None,
            title: Some("Squaring numbers ending in 5".to_string()),
            description: None,
            content_json: None,
            difficulty: None,
            order_index: None,
            xp_reward: Some(75),
            estimated_time: None,
            learning_objectives: None,
            prerequisites: None,
            vedic_sutras: None,
            thumbnail_image: None,
            is_published: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Squaring numbers ending in 5");
    assert_eq!(updated.xp_reward, 75);
    assert_eq!(updated.difficulty, created.difficulty);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

use super::*;

/// Tests creating a unit.
///
/// Expected: Ok with the unit stored and no lessons attached
#[tokio::test]
async fn creates_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UnitRepository::new(db);
    let unit = repo
        .create(CreateUnitParams {
            title: "Multiplication Tricks".to_string(),
            description: Some("Nikhilam and friends".to_string()),
            difficulty: DifficultyLevel::Intermediate,
            order_index: 2,
            icon: None,
            color_theme: Some("#ffaa00".to_string()),
            estimated_duration: 60,
        })
        .await?;

    assert_eq!(unit.title, "Multiplication Tricks");
    assert_eq!(unit.difficulty, DifficultyLevel::Intermediate);
    assert_eq!(unit.estimated_duration, Some(60));
    assert_eq!(repo.count_lessons(unit.id).await?, 0);
    assert_eq!(repo.get_by_id(unit.id).await?, Some(unit));

    Ok(())
}

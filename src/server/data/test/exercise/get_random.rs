use super::*;

/// Tests picking fewer exercises than exist.
///
/// Expected: Ok with exactly `count` distinct exercises
#[tokio::test]
async fn picks_distinct_exercises() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..8 {
        factory::create_exercise(db).await?;
    }

    let picked = ExerciseRepository::new(db).get_random(5).await?;
    let ids: HashSet<i32> = picked.iter().map(|e| e.id).collect();

    assert_eq!(picked.len(), 5);
    assert_eq!(ids.len(), 5);

    Ok(())
}

/// Tests asking for more exercises than exist.
///
/// Expected: Ok with every exercise returned once
#[tokio::test]
async fn returns_all_when_count_exceeds_pool() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_exercise(db).await?;
    factory::create_exercise(db).await?;

    let picked = ExerciseRepository::new(db).get_random(10).await?;

    assert_eq!(picked.len(), 2);

    Ok(())
}

/// Tests picking from an empty pool.
///
/// Expected: Ok with no exercises
#[tokio::test]
async fn returns_empty_without_exercises() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ExerciseRepository::new(db).get_random(10).await?.is_empty());

    Ok(())
}

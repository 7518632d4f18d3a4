use super::*;

/// Tests fetching the exercises of selected lessons.
///
/// Verifies that stored newline-separated options come back as a list.
///
/// Expected: Ok with only the exercises of the requested lesson
#[tokio::test]
async fn filters_by_lesson() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lesson = factory::create_lesson(db).await?;
    let other = factory::create_lesson(db).await?;
    let wanted = factory::exercise::ExerciseFactory::new(db)
        .lesson_id(lesson.id)
        .options(&["12", "14", "16"])
        .build()
        .await?;
    factory::exercise::ExerciseFactory::new(db)
        .lesson_id(other.id)
        .build()
        .await?;

    let repo = ExerciseRepository::new(db);
    let exercises = repo.get_by_lessons(&[lesson.id]).await?;

    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0].id, wanted.id);
    assert_eq!(exercises[0].options, vec!["12", "14", "16"]);
    assert!(repo.get_by_lessons(&[]).await?.is_empty());

    Ok(())
}

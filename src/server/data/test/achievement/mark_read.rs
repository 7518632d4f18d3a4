use super::*;

/// Tests marking notifications as read.
///
/// Verifies that only the caller's notifications are cleared and that earned
/// achievements stay earned.
///
/// Expected: Ok(1) with no unread notifications left for the caller
#[tokio::test]
async fn clears_only_callers_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_learning_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let achievement = factory::create_achievement(db, r#"{"lessons_completed": 1}"#).await?;
    let repo = AchievementRepository::new(db);

    repo.award(user.id, achievement.id, Utc::now()).await?;
    repo.award(other.id, achievement.id, Utc::now()).await?;

    assert_eq!(repo.mark_read(user.id).await?, 1);

    assert!(repo.get_unread(user.id).await?.is_empty());
    assert_eq!(repo.get_earned(user.id).await?.len(), 1);
    assert_eq!(repo.get_unread(other.id).await?.len(), 1);

    Ok(())
}

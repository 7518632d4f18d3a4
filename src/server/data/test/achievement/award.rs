use super::*;

/// Tests awarding an achievement.
///
/// Verifies that the award shows up as earned and as an unread notification.
///
/// Expected: Ok with the achievement in the earned set and unread list
#[tokio::test]
async fn award_is_earned_and_unread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_learning_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let achievement = factory::create_achievement(db, r#"{"lessons_completed": 1}"#).await?;
    let repo = AchievementRepository::new(db);

    repo.award(user.id, achievement.id, Utc::now()).await?;

    assert!(repo.earned_ids(user.id).await?.contains(&achievement.id));
    let unread = repo.get_unread(user.id).await?;
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].achievement.id, achievement.id);
    assert!(unread[0].is_new);
    assert_eq!(repo.count_earned(user.id).await?, 1);

    Ok(())
}

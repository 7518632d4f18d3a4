use super::*;

/// Tests persisting gamification counters.
///
/// Verifies that every counter of `LearnerStats` is written back to the user row.
///
/// Expected: Ok with the stored stats equal to the written stats
#[tokio::test]
async fn persists_all_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let mut stats = repo.find_by_id(created.id).await?.unwrap().stats;
    stats.record_activity(Utc::now().date_naive());
    stats.award_xp(620);
    stats.total_lessons_completed = 3;
    stats.total_exercises_completed = 11;

    repo.update_stats(created.id, &stats).await?;

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored.stats, stats);
    assert_eq!(stored.stats.current_level, 2);
    assert_eq!(stored.stats.daily_streak, 1);

    Ok(())
}

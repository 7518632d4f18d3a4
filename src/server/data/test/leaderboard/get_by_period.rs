use super::*;

async fn insert_row(
    db: &DatabaseConnection,
    user_id: i32,
    period: &str,
    xp_earned: i32,
    rank: Option<i32>,
) -> Result<(), DbErr> {
    entity::leaderboard::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        period: ActiveValue::Set(period.to_string()),
        xp_earned: ActiveValue::Set(xp_earned),
        lessons_completed: ActiveValue::Set(0),
        streak_count: ActiveValue::Set(0),
        rank: ActiveValue::Set(rank),
        period_start: ActiveValue::Set(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()),
        period_end: ActiveValue::Set(NaiveDate::from_ymd_opt(2026, 3, 8).unwrap()),
        updated_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}

/// Tests reading one leaderboard period.
///
/// Verifies that rows of other periods are excluded and that ranked rows come first
/// in rank order, followed by unranked rows.
///
/// Expected: Ok with rank 1, rank 2, then the unranked row
#[tokio::test]
async fn orders_by_rank_then_xp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_learning_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gold = factory::user::UserFactory::new(db).username("gold").build().await?;
    let silver = factory::user::UserFactory::new(db).username("silver").build().await?;
    let unranked = factory::user::UserFactory::new(db).username("unranked").build().await?;

    insert_row(db, silver.id, "weekly", 300, Some(2)).await?;
    insert_row(db, unranked.id, "weekly", 900, None).await?;
    insert_row(db, gold.id, "weekly", 400, Some(1)).await?;
    insert_row(db, gold.id, "monthly", 1200, Some(1)).await?;

    let entries = LeaderboardRepository::new(db).get_by_period("weekly").await?;
    let names: Vec<&str> = entries.iter().map(|e| e.username.as_str()).collect();

    assert_eq!(names, vec!["gold", "silver", "unranked"]);

    Ok(())
}

use sea_orm_migration::prelude::*;

use super::m20260301_000011_create_achievement_table::Achievement;

/// (name, description, icon, xp_reward, criteria, category, rarity)
const CATALOGUE: [(&str, &str, &str, i32, &str, &str, &str); 8] = [
    (
        "First Steps",
        "Complete your first lesson",
        "🎯",
        50,
        r#"{"lessons_completed": 1}"#,
        "learning",
        "common",
    ),
    (
        "Speed Learner",
        "Complete 5 lessons",
        "⚡",
        100,
        r#"{"lessons_completed": 5}"#,
        "learning",
        "common",
    ),
    (
        "Math Enthusiast",
        "Complete 20 lessons",
        "🧮",
        250,
        r#"{"lessons_completed": 20}"#,
        "learning",
        "rare",
    ),
    (
        "Vedic Master",
        "Complete all 30 lessons",
        "👑",
        1000,
        r#"{"lessons_completed": 30}"#,
        "learning",
        "legendary",
    ),
    (
        "Streak Master",
        "Maintain a 7-day learning streak",
        "🔥",
        200,
        r#"{"daily_streak": 7}"#,
        "streak",
        "rare",
    ),
    (
        "Dedication",
        "Maintain a 30-day learning streak",
        "💎",
        500,
        r#"{"daily_streak": 30}"#,
        "streak",
        "epic",
    ),
    (
        "Perfect Score",
        "Score 100% on a quiz",
        "⭐",
        100,
        r#"{"perfect_quiz": 1}"#,
        "mastery",
        "common",
    ),
    (
        "Quick Thinker",
        "Solve an exercise in under 30 seconds",
        "🧠",
        150,
        r#"{"quick_solve": 30}"#,
        "speed",
        "rare",
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Achievement::Table).columns([
            Achievement::Name,
            Achievement::Description,
            Achievement::Icon,
            Achievement::XpReward,
            Achievement::Criteria,
            Achievement::Category,
            Achievement::Rarity,
            Achievement::IsHidden,
        ]);

        for (name, description, icon, xp_reward, criteria, category, rarity) in CATALOGUE {
            insert.values_panic([
                name.into(),
                description.into(),
                icon.into(),
                xp_reward.into(),
                criteria.into(),
                category.into(),
                rarity.into(),
                false.into(),
            ]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<&str> = CATALOGUE.iter().map(|entry| entry.0).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Achievement::Table)
                    .and_where(Expr::col(Achievement::Name).is_in(names))
                    .to_owned(),
            )
            .await
    }
}

//! Achievement factory for seeding the achievement catalogue in tests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test achievements.
///
/// # Example
///
/// ```rust,ignore
/// let first_steps = AchievementFactory::new(&db)
///     .name("First Steps")
///     .criteria(r#"{"lessons_completed": 1}"#)
///     .build()
///     .await?;
/// ```
pub struct AchievementFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    xp_reward: i32,
    criteria: Option<String>,
    rarity: String,
}

impl<'a> AchievementFactory<'a> {
    /// Defaults: name `"Achievement {id}"`, 100 XP, unlocked by one completed lesson.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Achievement {}", id),
            xp_reward: 100,
            criteria: Some(r#"{"lessons_completed": 1}"#.to_string()),
            rarity: "common".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn xp_reward(mut self, xp_reward: i32) -> Self {
        self.xp_reward = xp_reward;
        self
    }

    pub fn criteria(mut self, criteria: impl Into<String>) -> Self {
        self.criteria = Some(criteria.into());
        self
    }

    pub fn rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = rarity.into();
        self
    }

    pub async fn build(self) -> Result<entity::achievement::Model, DbErr> {
        entity::achievement::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            icon: ActiveValue::Set(Some("🏆".to_string())),
            badge_image: ActiveValue::Set(None),
            xp_reward: ActiveValue::Set(self.xp_reward),
            criteria: ActiveValue::Set(self.criteria),
            category: ActiveValue::Set(None),
            rarity: ActiveValue::Set(self.rarity),
            is_hidden: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an achievement with the given criteria JSON.
pub async fn create_achievement(
    db: &DatabaseConnection,
    criteria: &str,
) -> Result<entity::achievement::Model, DbErr> {
    AchievementFactory::new(db).criteria(criteria).build().await
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AchievementDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub badge_image: Option<String>,
    pub xp_reward: i32,
    pub category: Option<String>,
    pub rarity: String,
    pub earned: bool,
    pub earned_date: Option<DateTime<Utc>>,
}

/// Achievement unlocked by the activity that produced the response.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct NewAchievementDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub xp_reward: i32,
    pub rarity: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub achievement: NewAchievementDto,
    pub earned_date: DateTime<Utc>,
}

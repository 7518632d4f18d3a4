use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::UserRole;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub password_hash: String,
    pub date_of_birth: Date,
    pub grade_qualification: String,
    pub role: UserRole,
    pub created_at: DateTimeUtc,
    pub last_login: Option<DateTimeUtc>,
    pub is_active: bool,
    pub total_xp: i32,
    pub current_level: i32,
    pub daily_streak: i32,
    pub longest_streak: i32,
    pub last_activity_date: Option<Date>,
    pub points_today: i32,
    pub total_lessons_completed: i32,
    pub total_exercises_completed: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_progress::Entity")]
    UserProgress,
    #[sea_orm(has_many = "super::user_achievement::Entity")]
    UserAchievement,
    #[sea_orm(has_many = "super::quiz_attempt::Entity")]
    QuizAttempt,
    #[sea_orm(has_many = "super::challenge_attempt::Entity")]
    ChallengeAttempt,
    #[sea_orm(has_many = "super::leaderboard::Entity")]
    Leaderboard,
}

impl Related<super::user_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProgress.def()
    }
}

impl Related<super::user_achievement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAchievement.def()
    }
}

impl Related<super::quiz_attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuizAttempt.def()
    }
}

impl Related<super::challenge_attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChallengeAttempt.def()
    }
}

impl Related<super::leaderboard::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leaderboard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

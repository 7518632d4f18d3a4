use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::DifficultyLevel;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "daily_challenge")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub challenge_date: Date,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    pub correct_answer: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub explanation: Option<String>,
    pub difficulty: DifficultyLevel,
    pub xp_reward: i32,
    /// Time limit in seconds.
    pub time_limit: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::challenge_attempt::Entity")]
    ChallengeAttempt,
}

impl Related<super::challenge_attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChallengeAttempt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

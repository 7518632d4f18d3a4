use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "challenge_attempt")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub challenge_id: i32,
    pub user_answer: Option<String>,
    pub is_correct: bool,
    pub time_taken: Option<i32>,
    pub attempted_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::daily_challenge::Entity",
        from = "Column::ChallengeId",
        to = "super::daily_challenge::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DailyChallenge,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::daily_challenge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyChallenge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::DifficultyLevel;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "exercise")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lesson_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    pub correct_answer: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub explanation: Option<String>,
    pub difficulty: DifficultyLevel,
    pub xp_reward: i32,
    pub question_type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub options: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub hints: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub step_by_step_solution: Option<String>,
    pub time_limit: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub tags: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lesson::Entity",
        from = "Column::LessonId",
        to = "super::lesson::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Lesson,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lesson_sutra")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lesson_id: Option<i32>,
    pub sutra_id: i32,
    pub is_primary: bool,
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
    #[sea_orm(
        belongs_to = "super::vedic_sutra::Entity",
        from = "Column::SutraId",
        to = "super::vedic_sutra::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    VedicSutra,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl Related<super::vedic_sutra::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VedicSutra.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

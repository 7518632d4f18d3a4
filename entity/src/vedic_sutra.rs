use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vedic_sutra")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub sanskrit_name: Option<String>,
    pub english_translation: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub applications: Option<String>,
    pub order_index: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::lesson_sutra::Entity")]
    LessonSutra,
}

impl Related<super::lesson_sutra::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonSutra.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

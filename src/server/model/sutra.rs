use crate::model::sutra::SutraDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Sutra {
    pub id: i32,
    pub name: String,
    pub sanskrit_name: Option<String>,
    pub english_translation: Option<String>,
    pub description: Option<String>,
    pub applications: Option<String>,
    pub order_index: i32,
}

impl Sutra {
    pub fn from_entity(entity: entity::vedic_sutra::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            sanskrit_name: entity.sanskrit_name,
            english_translation: entity.english_translation,
            description: entity.description,
            applications: entity.applications,
            order_index: entity.order_index,
        }
    }

    pub fn into_dto(self) -> SutraDto {
        SutraDto {
            id: self.id,
            name: self.name,
            sanskrit_name: self.sanskrit_name,
            english_translation: self.english_translation,
            description: self.description,
            applications: self.applications,
            order_index: self.order_index,
        }
    }
}

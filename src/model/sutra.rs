use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SutraDto {
    pub id: i32,
    pub name: String,
    pub sanskrit_name: Option<String>,
    pub english_translation: Option<String>,
    pub description: Option<String>,
    pub applications: Option<String>,
    pub order_index: i32,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration form. Fields are optional so missing values produce a field-specific error.
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct RegisterDto {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    pub grade_qualification: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct LoginDto {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct RegisteredUserDto {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub date_of_birth: NaiveDate,
    pub grade_qualification: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterResponseDto {
    pub message: String,
    pub user: RegisteredUserDto,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct LoginUserDto {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub role: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    pub token: String,
    pub user: LoginUserDto,
}

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
    service::auth::token::TokenService,
};
use entity::sea_orm_active_enums::UserRole;
use test_utils::{builder::TestBuilder, factory};

mod require;

fn token_service() -> TokenService {
    TokenService::new("guard-test-secret", Duration::hours(1))
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

async fn load(db: &sea_orm::DatabaseConnection, id: i32) -> User {
    UserRepository::new(db).find_by_id(id).await.unwrap().unwrap()
}

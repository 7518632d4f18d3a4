use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, HealthDto, MessageDto},
        auth::{LoginDto, LoginResponseDto, RegisterDto, RegisterResponseDto},
        user::ProfileResponseDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{LoginParams, RegisterParams},
        service::account::AccountService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Liveness check.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }),
    )
}

/// Register a new account.
///
/// Validates the form in a fixed order (required fields, password length, date format,
/// minimum age) and then checks that the username and email are free. Usernames listed
/// in `ADMIN_USERNAMES` register as admins.
///
/// # Arguments
/// - `state` - Application state containing the database connection and admin list
/// - `payload` - Registration form
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Validation failed
/// - `409 Conflict` - Username or email already exists
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = RegisterResponseDto),
        (status = 400, description = "Invalid registration form", body = ErrorDto),
        (status = 409, description = "Username or email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = RegisterParams::from_dto(payload, Utc::now().date_naive())?;

    let user = AccountService::new(&state.db)
        .register(params, &state.admin_usernames)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseDto {
            message: "User registered successfully".to_string(),
            user: user.into_registered_dto(),
        }),
    ))
}

/// Log in with username and password.
///
/// # Returns
/// - `200 OK` - Bearer token and account summary
/// - `400 Bad Request` - Username or password missing
/// - `401 Unauthorized` - Wrong credentials or deactivated account
/// - `500 Internal Server Error` - Database or token error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Username and password are required", body = ErrorDto),
        (status = 401, description = "Invalid credentials or deactivated account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = LoginParams::from_dto(payload)?;

    let (token, user) = AccountService::new(&state.db)
        .login(params, &state.tokens, Utc::now())
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            message: "Login successful".to_string(),
            token,
            user: user.into_login_dto(),
        }),
    ))
}

/// Log out.
///
/// Tokens are stateless, so this only confirms the caller held a valid one; the client
/// discards the token.
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Logged out successfully")),
    ))
}

/// Get the caller's account details.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Account details", body = ProfileResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((
        StatusCode::OK,
        Json(ProfileResponseDto {
            user: user.into_profile_dto(),
        }),
    ))
}

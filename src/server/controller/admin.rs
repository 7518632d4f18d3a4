use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        admin::{
            AdminStatsDto, AdminUserProfileDto, AdminUsersDto, ChangeRoleDto,
            ChangeRoleResponseDto, ToggleStatusResponseDto, UserRoleDto, UserStatusDto,
        },
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping user administration endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// List every account.
///
/// # Access Control
/// - `Admin` - Only admins can list accounts
///
/// # Returns
/// - `200 OK` - Accounts ordered by ID
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All accounts", body = AdminUsersDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = AdminService::new(&state.db).list_users().await?;

    Ok((
        StatusCode::OK,
        Json(AdminUsersDto {
            users: users.into_iter().map(|u| u.into_admin_dto()).collect(),
        }),
    ))
}

/// Activate or deactivate an account.
///
/// Deactivated accounts cannot log in and their existing tokens stop working. Admins
/// cannot deactivate themselves.
///
/// # Access Control
/// - `Admin` - Only admins can change account status
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `user_id` - Account to toggle
///
/// # Returns
/// - `200 OK` - New status of the account
/// - `400 Bad Request` - Target is the caller
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No such account
#[utoipa::path(
    post,
    path = "/api/admin/users/{user_id}/toggle-status",
    tag = ADMIN_TAG,
    params(
        ("user_id" = i32, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Status toggled", body = ToggleStatusResponseDto),
        (status = 400, description = "Cannot deactivate your own account", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn toggle_user_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = AdminService::new(&state.db)
        .toggle_status(admin.id, user_id)
        .await?;

    let message = if user.is_active {
        "User activated successfully"
    } else {
        "User deactivated successfully"
    };

    Ok((
        StatusCode::OK,
        Json(ToggleStatusResponseDto {
            message: message.to_string(),
            user: UserStatusDto {
                id: user.id,
                username: user.username,
                is_active: user.is_active,
            },
        }),
    ))
}

/// Change the role of another account.
///
/// # Access Control
/// - `Admin` - Only admins can change roles
///
/// # Returns
/// - `200 OK` - New role of the account
/// - `400 Bad Request` - Unknown role, or target is the caller
/// - `404 Not Found` - No such account
#[utoipa::path(
    post,
    path = "/api/admin/users/{user_id}/change-role",
    tag = ADMIN_TAG,
    params(
        ("user_id" = i32, Path, description = "Account ID")
    ),
    request_body = ChangeRoleDto,
    responses(
        (status = 200, description = "Role changed", body = ChangeRoleResponseDto),
        (status = 400, description = "Invalid role or own account", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn change_user_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    payload: Result<Json<ChangeRoleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;

    let user = AdminService::new(&state.db)
        .change_role(admin.id, user_id, payload.role.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ChangeRoleResponseDto {
            message: "User role updated successfully".to_string(),
            user: UserRoleDto {
                id: user.id,
                username: user.username,
                role: user.role.as_str().to_string(),
            },
        }),
    ))
}

/// Get an account with its learning counters.
#[utoipa::path(
    get,
    path = "/api/admin/users/{user_id}/profile",
    tag = ADMIN_TAG,
    params(
        ("user_id" = i32, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account profile", body = AdminUserProfileDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = AdminService::new(&state.db).user_profile(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_admin_profile_dto())))
}

/// Dashboard totals.
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Platform totals", body = AdminStatsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let stats = AdminService::new(&state.db).platform_stats(Utc::now()).await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

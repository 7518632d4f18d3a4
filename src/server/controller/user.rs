use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        achievement::NotificationDto,
        api::{ErrorDto, MessageDto},
        user::{LearnerProfileDto, UpdateProfileDto, UserStatsDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::UpdateProfileParam,
        service::{account::AccountService, achievement::AchievementService},
        state::AppState,
    },
};

/// Tag for grouping learner account endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the caller's profile with XP, level and streak.
#[utoipa::path(
    get,
    path = "/api/user/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Learner profile", body = LearnerProfileDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_learner_profile_dto())))
}

/// Update the caller's email or grade.
///
/// A blank email clears it. A blank grade is rejected.
///
/// # Returns
/// - `200 OK` - Updated learner profile
/// - `400 Bad Request` - Blank grade
/// - `401 Unauthorized` - Missing or invalid token
/// - `409 Conflict` - Email used by another account
#[utoipa::path(
    put,
    path = "/api/user/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = LearnerProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 409, description = "Email already exists", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateProfileDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Json(payload) = payload?;

    let params = UpdateProfileParam::from_dto(payload)?;
    let user = AccountService::new(&state.db)
        .update_profile(user.id, params)
        .await?;

    Ok((StatusCode::OK, Json(user.into_learner_profile_dto())))
}

/// Get the caller's learning statistics.
#[utoipa::path(
    get,
    path = "/api/user/stats",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Learning statistics", body = UserStatsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let summary = AccountService::new(&state.db).stats(user).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// List achievements the caller earned but has not seen yet.
#[utoipa::path(
    get,
    path = "/api/user/notifications",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Unread achievement notifications", body = Vec<NotificationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let notifications = AchievementService::new(&state.db)
        .notifications(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            notifications
                .into_iter()
                .map(|n| n.into_notification_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Mark every unread notification as seen.
#[utoipa::path(
    post,
    path = "/api/user/notifications/read",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Notifications marked as read", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn mark_notifications_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    AchievementService::new(&state.db).mark_read(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Notifications marked as read")),
    ))
}

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{achievement::AchievementDto, api::ErrorDto},
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::achievement::AchievementService, state::AppState,
    },
};

/// Tag for grouping achievement endpoints in OpenAPI documentation
pub static ACHIEVEMENT_TAG: &str = "achievement";

/// List achievements with the caller's earned state.
///
/// Hidden achievements are only listed once the caller has earned them.
#[utoipa::path(
    get,
    path = "/api/achievements",
    tag = ACHIEVEMENT_TAG,
    responses(
        (status = 200, description = "Achievement catalogue", body = Vec<AchievementDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_achievements(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let achievements = AchievementService::new(&state.db)
        .list_for_user(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            achievements
                .into_iter()
                .map(|(a, earned_date)| a.into_dto(earned_date))
                .collect::<Vec<_>>(),
        ),
    ))
}

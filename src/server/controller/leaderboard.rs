use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        leaderboard::{LeaderboardEntryDto, LeaderboardQuery},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::leaderboard::LeaderboardService, state::AppState,
    },
};

/// Tag for grouping leaderboard endpoints in OpenAPI documentation
pub static LEADERBOARD_TAG: &str = "leaderboard";

/// Get the stored leaderboard of a period.
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = LEADERBOARD_TAG,
    params(
        ("period" = Option<String>, Query, description = "Leaderboard period (default: weekly)")
    ),
    responses(
        (status = 200, description = "Leaderboard rows", body = Vec<LeaderboardEntryDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LeaderboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let entries = LeaderboardService::new(&state.db)
        .standings(query.period.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            entries
                .into_iter()
                .map(|e| e.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

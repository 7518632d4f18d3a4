use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, sutra::SutraDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::sutra::SutraService,
        state::AppState,
    },
};

/// Tag for grouping sutra endpoints in OpenAPI documentation
pub static SUTRA_TAG: &str = "sutra";

#[utoipa::path(
    get,
    path = "/api/sutras",
    tag = SUTRA_TAG,
    responses(
        (status = 200, description = "Sutras in teaching order", body = Vec<SutraDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_sutras(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let sutras = SutraService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(sutras.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>()),
    ))
}

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        challenge::{
            ChallengeAttemptDto, ChallengeAttemptResultDto, CreateDailyChallengeDto,
            DailyChallengeResponseDto, DailyChallengesDto, TodayChallengeDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::challenge::CreateDailyChallengeParams,
        service::challenge::ChallengeService,
        state::AppState,
    },
};

/// Tag for grouping daily challenge endpoints in OpenAPI documentation
pub static CHALLENGE_TAG: &str = "challenge";

/// Today's challenge, without its answer.
///
/// # Returns
/// - `200 OK` - Today's challenge and whether the caller already answered it
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No challenge scheduled for today (UTC)
#[utoipa::path(
    get,
    path = "/api/challenges/daily",
    tag = CHALLENGE_TAG,
    responses(
        (status = 200, description = "Today's challenge", body = TodayChallengeDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No challenge available for today", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_daily_challenge(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let (challenge, attempted) = ChallengeService::new(&state.db)
        .today(user.id, Utc::now().date_naive())
        .await?;

    Ok((StatusCode::OK, Json(challenge.into_today_dto(attempted))))
}

/// Answer today's challenge. Each learner gets one attempt.
#[utoipa::path(
    post,
    path = "/api/challenges/daily/attempt",
    tag = CHALLENGE_TAG,
    request_body = ChallengeAttemptDto,
    responses(
        (status = 200, description = "Attempt graded", body = ChallengeAttemptResultDto),
        (status = 400, description = "Answer missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No challenge available for today", body = ErrorDto),
        (status = 409, description = "Challenge already attempted today", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn attempt_daily_challenge(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ChallengeAttemptDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Json(payload) = payload?;

    let outcome = ChallengeService::new(&state.db)
        .attempt(
            user.id,
            payload.answer.as_deref(),
            payload.time_taken,
            Utc::now(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ChallengeAttemptResultDto {
            correct: outcome.correct,
            correct_answer: outcome.challenge.correct_answer,
            explanation: outcome.challenge.explanation,
            xp_awarded: outcome.xp_awarded,
            total_xp: outcome.activity.user.stats.total_xp,
            new_achievements: outcome
                .activity
                .new_achievements
                .into_iter()
                .map(|a| a.into_new_dto())
                .collect(),
        }),
    ))
}

/// List scheduled daily challenges.
///
/// # Access Control
/// - `Admin` - Only admins can schedule challenges
#[utoipa::path(
    get,
    path = "/api/admin/challenges",
    tag = CHALLENGE_TAG,
    responses(
        (status = 200, description = "All daily challenges", body = DailyChallengesDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_admin_challenges(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let challenges = ChallengeService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(DailyChallengesDto {
            challenges: challenges.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}

/// Schedule a daily challenge.
///
/// # Returns
/// - `201 Created` - Scheduled challenge
/// - `400 Bad Request` - Missing fields or malformed date
/// - `409 Conflict` - A challenge already exists for that date
#[utoipa::path(
    post,
    path = "/api/admin/challenges",
    tag = CHALLENGE_TAG,
    request_body = CreateDailyChallengeDto,
    responses(
        (status = 201, description = "Challenge created", body = DailyChallengeResponseDto),
        (status = 400, description = "Invalid challenge data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 409, description = "A challenge already exists for this date", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_challenge(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateDailyChallengeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;

    let params = CreateDailyChallengeParams::from_dto(payload)?;
    let challenge = ChallengeService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(DailyChallengeResponseDto {
            message: "Challenge created successfully".to_string(),
            challenge: challenge.into_dto(),
        }),
    ))
}

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        exercise::{
            ExerciseAttemptDto, ExerciseAttemptResultDto, ExerciseInputDto, PracticeExerciseDto,
            QuestionResponseDto, QuestionsDto, RandomExercisesQuery,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::exercise::{CreateExerciseParams, UpdateExerciseParams},
        service::exercise::ExerciseService,
        state::AppState,
    },
};

/// Tag for grouping exercise endpoints in OpenAPI documentation
pub static EXERCISE_TAG: &str = "exercise";

/// Draw random practice exercises.
///
/// `count` defaults to 10 and is clamped to 1..=50.
#[utoipa::path(
    get,
    path = "/api/exercises/random",
    tag = EXERCISE_TAG,
    params(
        ("count" = Option<u64>, Query, description = "Number of exercises (1-50)")
    ),
    responses(
        (status = 200, description = "Random exercises", body = Vec<PracticeExerciseDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_random_exercises(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RandomExercisesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let exercises = ExerciseService::new(&state.db).random(query.count).await?;

    Ok((
        StatusCode::OK,
        Json(
            exercises
                .into_iter()
                .map(|e| e.into_practice_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Answer a practice exercise.
///
/// Answers are compared ignoring case and surrounding whitespace. A correct answer earns
/// the exercise's XP; every attempt counts towards the learner's exercise total.
///
/// # Returns
/// - `200 OK` - Whether the answer was correct, the expected answer and XP earned
/// - `400 Bad Request` - No answer given
/// - `404 Not Found` - Unknown exercise
#[utoipa::path(
    post,
    path = "/api/exercises/{exercise_id}/attempt",
    tag = EXERCISE_TAG,
    params(
        ("exercise_id" = i32, Path, description = "Exercise ID")
    ),
    request_body = ExerciseAttemptDto,
    responses(
        (status = 200, description = "Attempt graded", body = ExerciseAttemptResultDto),
        (status = 400, description = "Answer missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Exercise not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn attempt_exercise(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(exercise_id): Path<i32>,
    payload: Result<Json<ExerciseAttemptDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Json(payload) = payload?;

    let outcome = ExerciseService::new(&state.db)
        .attempt(
            user.id,
            exercise_id,
            payload.answer.as_deref(),
            payload.time_taken,
            Utc::now(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ExerciseAttemptResultDto {
            correct: outcome.correct,
            correct_answer: outcome.exercise.correct_answer,
            explanation: outcome.exercise.explanation,
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

/// List every exercise.
///
/// # Access Control
/// - `Admin` - Only admins can manage questions
#[utoipa::path(
    get,
    path = "/api/admin/questions",
    tag = EXERCISE_TAG,
    responses(
        (status = 200, description = "All exercises", body = QuestionsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_questions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let exercises = ExerciseService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(QuestionsDto {
            questions: exercises.into_iter().map(|e| e.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/admin/questions",
    tag = EXERCISE_TAG,
    request_body = ExerciseInputDto,
    responses(
        (status = 201, description = "Exercise created", body = QuestionResponseDto),
        (status = 400, description = "Invalid exercise data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ExerciseInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;

    let params = CreateExerciseParams::from_dto(payload)?;
    let exercise = ExerciseService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(QuestionResponseDto {
            message: "Question created successfully".to_string(),
            question: exercise.into_dto(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/questions/{question_id}",
    tag = EXERCISE_TAG,
    params(
        ("question_id" = i32, Path, description = "Exercise ID")
    ),
    request_body = ExerciseInputDto,
    responses(
        (status = 200, description = "Exercise updated", body = QuestionResponseDto),
        (status = 400, description = "Invalid exercise data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(question_id): Path<i32>,
    payload: Result<Json<ExerciseInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;

    let params = UpdateExerciseParams::from_dto(question_id, payload)?;
    let exercise = ExerciseService::new(&state.db).update(params).await?;

    Ok((
        StatusCode::OK,
        Json(QuestionResponseDto {
            message: "Question updated successfully".to_string(),
            question: exercise.into_dto(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/admin/questions/{question_id}",
    tag = EXERCISE_TAG,
    params(
        ("question_id" = i32, Path, description = "Exercise ID")
    ),
    responses(
        (status = 200, description = "Exercise deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(question_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    ExerciseService::new(&state.db).delete(question_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Question deleted successfully")),
    ))
}

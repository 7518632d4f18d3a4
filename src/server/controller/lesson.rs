use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        lesson::{LearnerLessonDto, LessonInputDto, LessonResponseDto, LessonsDto},
        progress::{CompleteLessonDto, CompleteLessonResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::lesson::{CreateLessonParams, UpdateLessonParams},
        service::{lesson::LessonService, progress::ProgressService},
        state::AppState,
    },
};

/// Tag for grouping lesson endpoints in OpenAPI documentation
pub static LESSON_TAG: &str = "lesson";

/// List published lessons with the caller's completion flag.
#[utoipa::path(
    get,
    path = "/api/lessons",
    tag = LESSON_TAG,
    responses(
        (status = 200, description = "Published lessons", body = Vec<LearnerLessonDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_lessons(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let lessons = LessonService::new(&state.db)
        .list_for_learner(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            lessons
                .into_iter()
                .map(|(lesson, completed)| LearnerLessonDto {
                    lesson: lesson.into_dto(),
                    completed,
                })
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Submit a lesson score.
///
/// A score of 65 or more completes the lesson; the lesson's XP is only awarded the first
/// time it is completed. Lower scores are stored as progress.
///
/// # Returns
/// - `200 OK` - Stored progress, XP earned and any unlocked achievements
/// - `400 Bad Request` - Score missing or outside 0..=100
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Lesson missing or unpublished
#[utoipa::path(
    post,
    path = "/api/lessons/{lesson_id}/complete",
    tag = LESSON_TAG,
    params(
        ("lesson_id" = i32, Path, description = "Lesson ID")
    ),
    request_body = CompleteLessonDto,
    responses(
        (status = 200, description = "Progress recorded", body = CompleteLessonResponseDto),
        (status = 400, description = "Invalid score", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn complete_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lesson_id): Path<i32>,
    payload: Result<Json<CompleteLessonDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Json(payload) = payload?;

    let completion = ProgressService::new(&state.db)
        .complete_lesson(
            user.id,
            lesson_id,
            payload.score,
            payload.time_spent,
            Utc::now(),
        )
        .await?;

    let message = if completion.newly_completed {
        "Lesson completed successfully"
    } else if completion.progress.completed {
        "Lesson already completed"
    } else {
        "Progress saved"
    };
    let learner = completion.activity.user;

    Ok((
        StatusCode::OK,
        Json(CompleteLessonResponseDto {
            message: message.to_string(),
            progress: completion.progress.into_dto(completion.lesson_id),
            xp_awarded: completion.xp_awarded,
            total_xp: learner.stats.total_xp,
            level: learner.stats.current_level,
            new_achievements: completion
                .activity
                .new_achievements
                .into_iter()
                .map(|a| a.into_new_dto())
                .collect(),
        }),
    ))
}

/// List every lesson, drafts included.
///
/// # Access Control
/// - `Admin` - Only admins can manage lessons
#[utoipa::path(
    get,
    path = "/api/admin/lessons",
    tag = LESSON_TAG,
    responses(
        (status = 200, description = "All lessons", body = LessonsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_admin_lessons(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let lessons = LessonService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(LessonsDto {
            lessons: lessons.into_iter().map(|l| l.into_dto()).collect(),
        }),
    ))
}

/// Create a lesson.
///
/// # Returns
/// - `201 Created` - Created lesson
/// - `400 Bad Request` - Missing title or difficulty
/// - `404 Not Found` - Referenced unit does not exist
#[utoipa::path(
    post,
    path = "/api/admin/lessons",
    tag = LESSON_TAG,
    request_body = LessonInputDto,
    responses(
        (status = 201, description = "Lesson created", body = LessonResponseDto),
        (status = 400, description = "Invalid lesson data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LessonInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;

    let params = CreateLessonParams::from_dto(payload)?;
    let lesson = LessonService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(LessonResponseDto {
            message: "Lesson created successfully".to_string(),
            lesson: lesson.into_dto(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/lessons/{lesson_id}",
    tag = LESSON_TAG,
    params(
        ("lesson_id" = i32, Path, description = "Lesson ID")
    ),
    request_body = LessonInputDto,
    responses(
        (status = 200, description = "Lesson updated", body = LessonResponseDto),
        (status = 400, description = "Invalid lesson data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Lesson or unit not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lesson_id): Path<i32>,
    payload: Result<Json<LessonInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;

    let params = UpdateLessonParams::from_dto(lesson_id, payload)?;
    let lesson = LessonService::new(&state.db).update(params).await?;

    Ok((
        StatusCode::OK,
        Json(LessonResponseDto {
            message: "Lesson updated successfully".to_string(),
            lesson: lesson.into_dto(),
        }),
    ))
}

/// Delete a lesson. Its exercises, quizzes and progress rows are kept but detached.
#[utoipa::path(
    delete,
    path = "/api/admin/lessons/{lesson_id}",
    tag = LESSON_TAG,
    params(
        ("lesson_id" = i32, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Lesson deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lesson_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    LessonService::new(&state.db).delete(lesson_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Lesson deleted successfully")),
    ))
}

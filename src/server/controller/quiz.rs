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
        quiz::{
            LearnerQuizDto, QuizAttemptDto, QuizAttemptResultDto, QuizInputDto, QuizQuestionDto,
            QuizQuestionInputDto, QuizQuestionQuery, QuizQuestionResponseDto, QuizQuestionsDto,
            QuizResponseDto, QuizzesDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::quiz::{
            CreateQuizParams, CreateQuizQuestionParams, UpdateQuizParams,
            UpdateQuizQuestionParams,
        },
        service::quiz::QuizService,
        state::AppState,
    },
};

/// Tag for grouping quiz endpoints in OpenAPI documentation
pub static QUIZ_TAG: &str = "quiz";

/// List quizzes with the caller's attempt history.
#[utoipa::path(
    get,
    path = "/api/challenges",
    tag = QUIZ_TAG,
    responses(
        (status = 200, description = "Quizzes with attempt history", body = Vec<LearnerQuizDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_quizzes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let quizzes = QuizService::new(&state.db).list_for_learner(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            quizzes
                .into_iter()
                .map(|(quiz, count, summary)| quiz.into_learner_dto(count, summary))
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Ordered questions of a quiz.
#[utoipa::path(
    get,
    path = "/api/quiz/{quiz_id}/questions",
    tag = QUIZ_TAG,
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Quiz questions", body = Vec<QuizQuestionDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Quiz not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_quiz_questions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(quiz_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let questions = QuizService::new(&state.db).questions(quiz_id).await?;

    Ok((
        StatusCode::OK,
        Json(questions.into_iter().map(|q| q.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Submit answers to a quiz.
///
/// The score is the share of question points answered correctly. Quiz XP is only paid
/// for the caller's first passing attempt.
///
/// # Returns
/// - `200 OK` - Graded attempt with per-question results
/// - `400 Bad Request` - Quiz has no questions
/// - `404 Not Found` - Unknown quiz
/// - `409 Conflict` - All attempts used
#[utoipa::path(
    post,
    path = "/api/quiz/{quiz_id}/attempt",
    tag = QUIZ_TAG,
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    request_body = QuizAttemptDto,
    responses(
        (status = 200, description = "Attempt graded", body = QuizAttemptResultDto),
        (status = 400, description = "Quiz has no questions", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Quiz not found", body = ErrorDto),
        (status = 409, description = "Maximum attempts reached", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn attempt_quiz(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(quiz_id): Path<i32>,
    payload: Result<Json<QuizAttemptDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Json(payload) = payload?;

    let outcome = QuizService::new(&state.db)
        .attempt(
            user.id,
            quiz_id,
            &payload.answers,
            payload.time_taken,
            Utc::now(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(QuizAttemptResultDto {
            attempt_id: outcome.attempt_id,
            score: outcome.grade.score,
            correct_answers: outcome.grade.correct_answers,
            total_questions: outcome.total_questions,
            is_passed: outcome.is_passed,
            xp_awarded: outcome.xp_awarded,
            results: outcome
                .grade
                .results
                .into_iter()
                .map(|r| r.into_dto())
                .collect(),
            new_achievements: outcome
                .activity
                .new_achievements
                .into_iter()
                .map(|a| a.into_new_dto())
                .collect(),
        }),
    ))
}

/// List every quiz with its question count.
///
/// # Access Control
/// - `Admin` - Only admins can manage quizzes
#[utoipa::path(
    get,
    path = "/api/admin/quizzes",
    tag = QUIZ_TAG,
    responses(
        (status = 200, description = "All quizzes", body = QuizzesDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_admin_quizzes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let quizzes = QuizService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(QuizzesDto {
            quizzes: quizzes
                .into_iter()
                .map(|(quiz, count)| quiz.into_dto(count))
                .collect(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/admin/quizzes",
    tag = QUIZ_TAG,
    request_body = QuizInputDto,
    responses(
        (status = 201, description = "Quiz created", body = QuizResponseDto),
        (status = 400, description = "Invalid quiz data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_quiz(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<QuizInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;

    let params = CreateQuizParams::from_dto(payload)?;
    let quiz = QuizService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(QuizResponseDto {
            message: "Quiz created successfully".to_string(),
            quiz: quiz.into_dto(0),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/quizzes/{quiz_id}",
    tag = QUIZ_TAG,
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    request_body = QuizInputDto,
    responses(
        (status = 200, description = "Quiz updated", body = QuizResponseDto),
        (status = 400, description = "Invalid quiz data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Quiz not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_quiz(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(quiz_id): Path<i32>,
    payload: Result<Json<QuizInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;

    let params = UpdateQuizParams::from_dto(quiz_id, payload)?;
    let (quiz, count) = QuizService::new(&state.db).update(params).await?;

    Ok((
        StatusCode::OK,
        Json(QuizResponseDto {
            message: "Quiz updated successfully".to_string(),
            quiz: quiz.into_dto(count),
        }),
    ))
}

/// Delete a quiz along with its questions and attempts.
#[utoipa::path(
    delete,
    path = "/api/admin/quizzes/{quiz_id}",
    tag = QUIZ_TAG,
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Quiz deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Quiz not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_quiz(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(quiz_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    QuizService::new(&state.db).delete(quiz_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Quiz deleted successfully")),
    ))
}

/// List quiz questions, optionally only those of one quiz.
#[utoipa::path(
    get,
    path = "/api/admin/quiz-questions",
    tag = QUIZ_TAG,
    params(
        ("quiz_id" = Option<i32>, Query, description = "Only questions of this quiz")
    ),
    responses(
        (status = 200, description = "Quiz questions", body = QuizQuestionsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_admin_quiz_questions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<QuizQuestionQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let questions = QuizService::new(&state.db)
        .list_questions(query.quiz_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(QuizQuestionsDto {
            questions: questions.into_iter().map(|q| q.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/admin/quiz-questions",
    tag = QUIZ_TAG,
    request_body = QuizQuestionInputDto,
    responses(
        (status = 201, description = "Question created", body = QuizQuestionResponseDto),
        (status = 400, description = "Invalid question data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Quiz not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_quiz_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<QuizQuestionInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;

    let params = CreateQuizQuestionParams::from_dto(payload)?;
    let question = QuizService::new(&state.db).create_question(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(QuizQuestionResponseDto {
            message: "Quiz question created successfully".to_string(),
            question: question.into_dto(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/quiz-questions/{question_id}",
    tag = QUIZ_TAG,
    params(
        ("question_id" = i32, Path, description = "Quiz question ID")
    ),
    request_body = QuizQuestionInputDto,
    responses(
        (status = 200, description = "Question updated", body = QuizQuestionResponseDto),
        (status = 400, description = "Invalid question data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Quiz question not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_quiz_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(question_id): Path<i32>,
    payload: Result<Json<QuizQuestionInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;

    let params = UpdateQuizQuestionParams::from_dto(question_id, payload)?;
    let question = QuizService::new(&state.db).update_question(params).await?;

    Ok((
        StatusCode::OK,
        Json(QuizQuestionResponseDto {
            message: "Quiz question updated successfully".to_string(),
            question: question.into_dto(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/admin/quiz-questions/{question_id}",
    tag = QUIZ_TAG,
    params(
        ("question_id" = i32, Path, description = "Quiz question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Quiz question not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_quiz_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(question_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    QuizService::new(&state.db)
        .delete_question(question_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Quiz question deleted successfully")),
    ))
}

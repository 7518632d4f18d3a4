use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        lesson::LessonsDto,
        unit::{CreateUnitDto, UnitProgressDto, UnitResponseDto, UnitsDto, UpdateUnitDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::unit::{CreateUnitParams, UpdateUnitParams},
        service::unit::UnitService,
        state::AppState,
    },
};

/// Tag for grouping unit endpoints in OpenAPI documentation
pub static UNIT_TAG: &str = "unit";

/// Get the curriculum with the caller's progress.
///
/// Each unit carries the caller's completion percentage over its published lessons and
/// whether it is unlocked. The first unit is always unlocked; every other unit unlocks
/// when the unit before it reaches 100%.
///
/// # Returns
/// - `200 OK` - Units in order with lessons, exercises and progress
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/units",
    tag = UNIT_TAG,
    responses(
        (status = 200, description = "Units with progress", body = Vec<UnitProgressDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_units(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let units = UnitService::new(&state.db).progress_view(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(units.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// List all units for administration.
///
/// # Access Control
/// - `Admin` - Only admins can manage units
#[utoipa::path(
    get,
    path = "/api/admin/units",
    tag = UNIT_TAG,
    responses(
        (status = 200, description = "All units with lesson counts", body = UnitsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_admin_units(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let units = UnitService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(UnitsDto {
            units: units
                .into_iter()
                .map(|(unit, lessons_count)| unit.into_dto(lessons_count))
                .collect(),
        }),
    ))
}

/// Create a unit.
///
/// # Access Control
/// - `Admin` - Only admins can manage units
///
/// # Returns
/// - `201 Created` - Created unit
/// - `400 Bad Request` - Missing title or unknown difficulty
#[utoipa::path(
    post,
    path = "/api/admin/units",
    tag = UNIT_TAG,
    request_body = CreateUnitDto,
    responses(
        (status = 201, description = "Unit created", body = UnitResponseDto),
        (status = 400, description = "Invalid unit data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_unit(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateUnitDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;

    let params = CreateUnitParams::from_dto(payload)?;
    let unit = UnitService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(UnitResponseDto {
            message: "Unit created successfully".to_string(),
            unit: unit.into_dto(0),
        }),
    ))
}

/// Update a unit. Omitted fields keep their value.
#[utoipa::path(
    put,
    path = "/api/admin/units/{unit_id}",
    tag = UNIT_TAG,
    params(
        ("unit_id" = i32, Path, description = "Unit ID")
    ),
    request_body = UpdateUnitDto,
    responses(
        (status = 200, description = "Unit updated", body = UnitResponseDto),
        (status = 400, description = "Invalid unit data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_unit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(unit_id): Path<i32>,
    payload: Result<Json<UpdateUnitDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;

    let params = UpdateUnitParams::from_dto(unit_id, payload)?;
    let (unit, lessons_count) = UnitService::new(&state.db).update(params).await?;

    Ok((
        StatusCode::OK,
        Json(UnitResponseDto {
            message: "Unit updated successfully".to_string(),
            unit: unit.into_dto(lessons_count),
        }),
    ))
}

/// Delete a unit. Its lessons are kept without a unit.
#[utoipa::path(
    delete,
    path = "/api/admin/units/{unit_id}",
    tag = UNIT_TAG,
    params(
        ("unit_id" = i32, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Unit deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_unit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(unit_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    UnitService::new(&state.db).delete(unit_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Unit deleted successfully")),
    ))
}

/// List every lesson of a unit, drafts included.
#[utoipa::path(
    get,
    path = "/api/admin/units/{unit_id}/lessons",
    tag = UNIT_TAG,
    params(
        ("unit_id" = i32, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Lessons of the unit", body = LessonsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_unit_lessons(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(unit_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let lessons = UnitService::new(&state.db).lessons(unit_id).await?;

    Ok((
        StatusCode::OK,
        Json(LessonsDto {
            lessons: lessons.into_iter().map(|l| l.into_dto()).collect(),
        }),
    ))
}

/// Remove a lesson from a unit without deleting the lesson.
#[utoipa::path(
    post,
    path = "/api/admin/units/{unit_id}/lessons/{lesson_id}/unlink",
    tag = UNIT_TAG,
    params(
        ("unit_id" = i32, Path, description = "Unit ID"),
        ("lesson_id" = i32, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Lesson unlinked", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Unit not found or lesson not in unit", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn unlink_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((unit_id, lesson_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    UnitService::new(&state.db)
        .unlink_lesson(unit_id, lesson_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Lesson unlinked from unit successfully")),
    ))
}

use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;
use uuid::Uuid;

use schoolhouse_core::{AppError, ErrorResponse, PaginationParams};
use schoolhouse_models::MessageResponse;

use crate::middleware::auth::AuthUser;
use crate::modules::teachers::model::{
    Course, CreateTeacherDto, PaginatedTeachersResponse, Teacher, UpdateTeacherDto,
};
use crate::modules::teachers::service::TeacherService;
use crate::state::AppState;
use crate::validator::{PathParams, QueryParams, ValidatedJson};

#[utoipa::path(
    post,
    path = "/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher created successfully", body = Teacher),
        (status = 400, description = "Validation failed or email already exists", body = ErrorResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, auth_user, dto), fields(caller = %auth_user.email()))]
pub async fn create_teacher(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateTeacherDto>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let teacher = TeacherService::create_teacher(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

#[utoipa::path(
    get,
    path = "/teachers",
    params(
        PaginationParams
    ),
    responses(
        (status = 200, description = "Page of teachers", body = PaginatedTeachersResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> Result<Json<PaginatedTeachersResponse>, AppError> {
    let (teachers, total) =
        TeacherService::get_teachers(&state.db, params.limit(), params.offset()).await?;

    Ok(Json(PaginatedTeachersResponse {
        data: teachers,
        meta: params.meta(total),
    }))
}

#[utoipa::path(
    get,
    path = "/teachers/{id}",
    params(
        ("id" = Uuid, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher details", body = Teacher),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    PathParams(id): PathParams<Uuid>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::get_teacher_by_id(&state.db, id).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    get,
    path = "/teachers/{id}/courses",
    params(
        ("id" = Uuid, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Courses taught by the teacher", body = Vec<Course>),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher_courses(
    State(state): State<AppState>,
    PathParams(id): PathParams<Uuid>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = TeacherService::get_teacher_courses(&state.db, id).await?;
    Ok(Json(courses))
}

#[utoipa::path(
    put,
    path = "/teachers/{id}",
    params(
        ("id" = Uuid, Path, description = "Teacher ID")
    ),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated successfully", body = Teacher),
        (status = 400, description = "Validation failed or email already exists", body = ErrorResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, auth_user, dto), fields(caller = %auth_user.email()))]
pub async fn update_teacher(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParams(id): PathParams<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherDto>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::update_teacher(&state.db, id, dto).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    delete,
    path = "/teachers/{id}",
    params(
        ("id" = Uuid, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher deleted successfully", body = MessageResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, auth_user), fields(caller = %auth_user.email()))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParams(id): PathParams<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    TeacherService::delete_teacher(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Teacher deleted successfully")))
}

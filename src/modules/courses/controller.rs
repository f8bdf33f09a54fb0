use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;
use uuid::Uuid;

use schoolhouse_core::{AppError, ErrorResponse, PaginationParams};
use schoolhouse_models::MessageResponse;

use crate::middleware::auth::AuthUser;
use crate::modules::courses::model::{
    Course, CreateCourseDto, PaginatedCoursesResponse, UpdateCourseDto,
};
use crate::modules::courses::service::CourseService;
use crate::state::AppState;
use crate::validator::{PathParams, QueryParams, ValidatedJson};

#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created successfully", body = Course),
        (status = 400, description = "Validation failed, duplicate code or unknown teacher", body = ErrorResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user, dto), fields(caller = %auth_user.email()))]
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course = CourseService::create_course(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

#[utoipa::path(
    get,
    path = "/courses",
    params(
        PaginationParams
    ),
    responses(
        (status = 200, description = "Page of courses", body = PaginatedCoursesResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_courses(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> Result<Json<PaginatedCoursesResponse>, AppError> {
    let (courses, total) =
        CourseService::get_courses(&state.db, params.limit(), params.offset()).await?;

    Ok(Json(PaginatedCoursesResponse {
        data: courses,
        meta: params.meta(total),
    }))
}

#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course details", body = Course),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    PathParams(id): PathParams<Uuid>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::get_course_by_id(&state.db, id).await?;
    Ok(Json(course))
}

#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated successfully", body = Course),
        (status = 400, description = "Validation failed, duplicate code or unknown teacher", body = ErrorResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user, dto), fields(caller = %auth_user.email()))]
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParams(id): PathParams<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::update_course(&state.db, id, dto).await?;
    Ok(Json(course))
}

#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course deleted successfully", body = MessageResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user), fields(caller = %auth_user.email()))]
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParams(id): PathParams<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    CourseService::delete_course(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Course deleted successfully")))
}

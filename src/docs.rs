use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use schoolhouse_core::{ErrorResponse, PaginationMeta, PaginationParams};
use schoolhouse_models::MessageResponse;
use schoolhouse_models::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use schoolhouse_models::courses::{
    Course, CreateCourseDto, PaginatedCoursesResponse, UpdateCourseDto,
};
use schoolhouse_models::students::{
    CreateStudentDto, PaginatedStudentsResponse, Student, UpdateStudentDto,
};
use schoolhouse_models::teachers::{
    CreateTeacherDto, PaginatedTeachersResponse, Teacher, UpdateTeacherDto,
};
use schoolhouse_models::users::User;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_users,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::get_teacher_courses,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
    ),
    components(
        schemas(
            User,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ErrorResponse,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            PaginatedStudentsResponse,
            Teacher,
            CreateTeacherDto,
            UpdateTeacherDto,
            PaginatedTeachersResponse,
            Course,
            CreateCourseDto,
            UpdateCourseDto,
            PaginatedCoursesResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and user listing"),
        (name = "Students", description = "Student management endpoints"),
        (name = "Teachers", description = "Teacher management endpoints"),
        (name = "Courses", description = "Course management endpoints")
    ),
    info(
        title = "Schoolhouse API",
        version = "0.1.0",
        description = "School management REST API with JWT bearer authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

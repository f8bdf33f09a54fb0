//! Course domain models and DTOs.

use schoolhouse_core::PaginationMeta;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    /// Unique course code, e.g. `MTH101`
    pub code: String,
    pub description: Option<String>,
    /// Teacher assigned to the course; cleared if the teacher is deleted
    pub teacher_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(
        length(min = 1, max = 200, message = "title must be 1-200 characters"),
        custom(function = "not_blank", message = "title must not be blank")
    )]
    #[schema(example = "Algebra I")]
    pub title: String,
    #[validate(
        length(min = 1, max = 20, message = "code must be 1-20 characters"),
        custom(function = "not_blank", message = "code must not be blank")
    )]
    #[schema(example = "MTH101")]
    pub code: String,
    pub description: Option<String>,
    pub teacher_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    #[validate(
        length(min = 1, max = 200, message = "title must be 1-200 characters"),
        custom(function = "not_blank", message = "title must not be blank")
    )]
    pub title: Option<String>,
    #[validate(
        length(min = 1, max = 20, message = "code must be 1-20 characters"),
        custom(function = "not_blank", message = "code must not be blank")
    )]
    pub code: Option<String>,
    pub description: Option<String>,
    pub teacher_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedCoursesResponse {
    pub data: Vec<Course>,
    pub meta: PaginationMeta,
}

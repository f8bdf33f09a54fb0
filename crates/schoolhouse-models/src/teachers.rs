//! Teacher domain models and DTOs.

use schoolhouse_core::PaginationMeta;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Teacher {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Main subject taught
    pub subject: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTeacherDto {
    #[validate(
        length(min = 1, max = 100, message = "name must be 1-100 characters"),
        custom(function = "not_blank", message = "name must not be blank")
    )]
    #[schema(example = "Mrs. Okafor")]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "okafor@school.io")]
    pub email: String,
    #[validate(length(max = 100, message = "subject must be at most 100 characters"))]
    #[schema(example = "Mathematics")]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTeacherDto {
    #[validate(
        length(min = 1, max = 100, message = "name must be 1-100 characters"),
        custom(function = "not_blank", message = "name must not be blank")
    )]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 100, message = "subject must be at most 100 characters"))]
    pub subject: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedTeachersResponse {
    pub data: Vec<Teacher>,
    pub meta: PaginationMeta,
}

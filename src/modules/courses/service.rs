use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use schoolhouse_core::AppError;
use schoolhouse_db::{is_foreign_key_violation, is_unique_violation};

use crate::modules::courses::model::{Course, CreateCourseDto, UpdateCourseDto};

pub(crate) const COURSE_COLUMNS: &str =
    "id, title, code, description, teacher_id, created_at, updated_at";

fn map_write_error(e: sqlx::Error, code: Option<&str>, teacher_id: Option<Uuid>) -> AppError {
    if is_unique_violation(&e) {
        return AppError::bad_request(anyhow::anyhow!(
            "Course with code {} already exists",
            code.unwrap_or("<unchanged>")
        ));
    }
    if is_foreign_key_violation(&e) {
        let teacher = teacher_id.map(|id| id.to_string()).unwrap_or_default();
        return AppError::bad_request(anyhow::anyhow!("Teacher {teacher} does not exist"));
    }
    AppError::database(e)
}

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        let code = dto.code.trim();

        let course = sqlx::query_as::<_, Course>(&format!(
            "INSERT INTO courses (title, code, description, teacher_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COURSE_COLUMNS}"
        ))
        .bind(dto.title.trim())
        .bind(code)
        .bind(dto.description.as_deref())
        .bind(dto.teacher_id)
        .fetch_one(db)
        .await
        .map_err(|e| map_write_error(e, Some(code), dto.teacher_id))?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn get_courses(
        db: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Course>, i64), AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
            .fetch_one(db)
            .await
            .context("Failed to count courses")
            .map_err(AppError::database)?;

        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses
             ORDER BY created_at, id
             LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .context("Failed to fetch courses")
        .map_err(AppError::database)?;

        Ok((courses, total))
    }

    #[instrument(skip(db))]
    pub async fn get_course_by_id(db: &PgPool, id: Uuid) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch course by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_course(
        db: &PgPool,
        id: Uuid,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        let code = dto.code.as_deref().map(str::trim);

        sqlx::query_as::<_, Course>(&format!(
            "UPDATE courses
             SET title = COALESCE($2, title),
                 code = COALESCE($3, code),
                 description = COALESCE($4, description),
                 teacher_id = COALESCE($5, teacher_id),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COURSE_COLUMNS}"
        ))
        .bind(id)
        .bind(dto.title.as_deref().map(str::trim))
        .bind(code)
        .bind(dto.description.as_deref())
        .bind(dto.teacher_id)
        .fetch_optional(db)
        .await
        .map_err(|e| map_write_error(e, code, dto.teacher_id))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete course")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        Ok(())
    }
}

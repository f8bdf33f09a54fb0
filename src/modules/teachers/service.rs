use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use schoolhouse_core::AppError;
use schoolhouse_db::is_unique_violation;
use schoolhouse_models::users::normalize_email;

use crate::modules::courses::service::COURSE_COLUMNS;
use crate::modules::teachers::model::{Course, CreateTeacherDto, Teacher, UpdateTeacherDto};

const TEACHER_COLUMNS: &str = "id, name, email, subject, created_at, updated_at";

fn map_write_error(e: sqlx::Error, email: Option<&str>) -> AppError {
    if is_unique_violation(&e) {
        return AppError::bad_request(anyhow::anyhow!(
            "Teacher with email {} already exists",
            email.unwrap_or("<unchanged>")
        ));
    }
    AppError::database(e)
}

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(db, dto))]
    pub async fn create_teacher(db: &PgPool, dto: CreateTeacherDto) -> Result<Teacher, AppError> {
        let email = normalize_email(&dto.email);

        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "INSERT INTO teachers (name, email, subject)
             VALUES ($1, $2, $3)
             RETURNING {TEACHER_COLUMNS}"
        ))
        .bind(dto.name.trim())
        .bind(&email)
        .bind(dto.subject.as_deref())
        .fetch_one(db)
        .await
        .map_err(|e| map_write_error(e, Some(&email)))?;

        Ok(teacher)
    }

    #[instrument(skip(db))]
    pub async fn get_teachers(
        db: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Teacher>, i64), AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teachers")
            .fetch_one(db)
            .await
            .context("Failed to count teachers")
            .map_err(AppError::database)?;

        let teachers = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers
             ORDER BY created_at, id
             LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .context("Failed to fetch teachers")
        .map_err(AppError::database)?;

        Ok((teachers, total))
    }

    #[instrument(skip(db))]
    pub async fn get_teacher_by_id(db: &PgPool, id: Uuid) -> Result<Teacher, AppError> {
        sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch teacher by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_teacher(
        db: &PgPool,
        id: Uuid,
        dto: UpdateTeacherDto,
    ) -> Result<Teacher, AppError> {
        let email = dto.email.as_deref().map(normalize_email);

        sqlx::query_as::<_, Teacher>(&format!(
            "UPDATE teachers
             SET name = COALESCE($2, name),
                 email = COALESCE($3, email),
                 subject = COALESCE($4, subject),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {TEACHER_COLUMNS}"
        ))
        .bind(id)
        .bind(dto.name.as_deref().map(str::trim))
        .bind(email.as_deref())
        .bind(dto.subject.as_deref())
        .fetch_optional(db)
        .await
        .map_err(|e| map_write_error(e, email.as_deref()))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))
    }

    /// Deletes the teacher; their courses stay and lose the assignment.
    #[instrument(skip(db))]
    pub async fn delete_teacher(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete teacher")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Teacher not found")));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn get_teacher_courses(db: &PgPool, id: Uuid) -> Result<Vec<Course>, AppError> {
        Self::get_teacher_by_id(db, id).await?;

        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses
             WHERE teacher_id = $1
             ORDER BY code"
        ))
        .bind(id)
        .fetch_all(db)
        .await
        .context("Failed to fetch teacher courses")
        .map_err(AppError::database)?;

        Ok(courses)
    }
}

use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use schoolhouse_core::AppError;
use schoolhouse_db::is_unique_violation;
use schoolhouse_models::users::normalize_email;

use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};

const STUDENT_COLUMNS: &str = "id, name, email, date_of_birth, created_at, updated_at";

fn map_write_error(e: sqlx::Error, email: Option<&str>) -> AppError {
    if is_unique_violation(&e) {
        return AppError::bad_request(anyhow::anyhow!(
            "Student with email {} already exists",
            email.unwrap_or("<unchanged>")
        ));
    }
    AppError::database(e)
}

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db, dto))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        let email = normalize_email(&dto.email);

        let student = sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (name, email, date_of_birth)
             VALUES ($1, $2, $3)
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(dto.name.trim())
        .bind(&email)
        .bind(dto.date_of_birth)
        .fetch_one(db)
        .await
        .map_err(|e| map_write_error(e, Some(&email)))?;

        Ok(student)
    }

    /// Returns one page of students and the total count.
    #[instrument(skip(db))]
    pub async fn get_students(
        db: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Student>, i64), AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(db)
            .await
            .context("Failed to count students")
            .map_err(AppError::database)?;

        let students = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students
             ORDER BY created_at, id
             LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .context("Failed to fetch students")
        .map_err(AppError::database)?;

        Ok((students, total))
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_id(db: &PgPool, id: Uuid) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch student by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }

    /// Applies the fields present in `dto`; absent fields keep their values.
    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &PgPool,
        id: Uuid,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        let email = dto.email.as_deref().map(normalize_email);

        sqlx::query_as::<_, Student>(&format!(
            "UPDATE students
             SET name = COALESCE($2, name),
                 email = COALESCE($3, email),
                 date_of_birth = COALESCE($4, date_of_birth),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(id)
        .bind(dto.name.as_deref().map(str::trim))
        .bind(email.as_deref())
        .bind(dto.date_of_birth)
        .fetch_optional(db)
        .await
        .map_err(|e| map_write_error(e, email.as_deref()))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete student")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        Ok(())
    }
}

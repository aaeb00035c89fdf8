use std::collections::HashMap;

use argon2::password_hash::PasswordHash;
use argon2::{Argon2, PasswordVerifier};
use async_trait::async_trait;
use eyre::{Result, eyre};

use rollcall_core::models::student::{AttendanceStatus, StudentRecord};

use crate::DbPool;
use crate::models::{DbAttendanceMark, DbStudent};
use crate::store::RosterStore;

/// Postgres-backed roster collection.
#[derive(Clone)]
pub struct PgRosterStore {
    pool: DbPool,
}

impl PgRosterStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn attendance_for(&self, id: &str) -> Result<Vec<String>> {
        let marks = sqlx::query_as::<_, DbAttendanceMark>(
            r#"
            SELECT student_id, class_code, marked_at
            FROM attendance
            WHERE student_id = $1
            ORDER BY marked_at
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(marks.into_iter().map(|mark| mark.class_code).collect())
    }
}

#[async_trait]
impl RosterStore for PgRosterStore {
    async fn list_students(&self) -> Result<Vec<StudentRecord>> {
        let rows = sqlx::query_as::<_, DbStudent>(
            r#"
            SELECT id, name, password_hash, status, created_at
            FROM students
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let marks = sqlx::query_as::<_, DbAttendanceMark>(
            r#"
            SELECT student_id, class_code, marked_at
            FROM attendance
            ORDER BY marked_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut history: HashMap<String, Vec<String>> = HashMap::new();
        for mark in marks {
            history.entry(mark.student_id).or_default().push(mark.class_code);
        }

        rows.into_iter()
            .map(|row| {
                let attended = history.remove(&row.id).unwrap_or_default();
                row.into_record(attended).map_err(Into::into)
            })
            .collect()
    }

    async fn get_student(&self, id: &str) -> Result<Option<StudentRecord>> {
        tracing::debug!("Getting student by id: {}", id);

        let row = sqlx::query_as::<_, DbStudent>(
            r#"
            SELECT id, name, password_hash, status, created_at
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let attended = self.attendance_for(id).await?;
                Ok(Some(row.into_record(attended)?))
            }
            None => Ok(None),
        }
    }

    async fn insert_student(&self, record: &StudentRecord, password_hash: &str) -> Result<bool> {
        tracing::debug!("Inserting student: id={}", record.id);

        let result = sqlx::query(
            r#"
            INSERT INTO students (id, name, password_hash, status)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(password_hash)
        .bind(record.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn verify_credentials(&self, id: &str, password: &str) -> Result<bool> {
        let hash = sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(hash) = hash else {
            // Unknown ids report a mismatch, not an error
            return Ok(false);
        };

        let parsed = PasswordHash::new(&hash)
            .map_err(|e| eyre!("Stored password hash is invalid: {}", e))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    async fn set_status(&self, id: &str, status: AttendanceStatus) -> Result<bool> {
        tracing::debug!("Setting student status: id={}, status={}", id, status);

        let result = sqlx::query("UPDATE students SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn record_attendance(&self, id: &str, class_code: &str) -> Result<()> {
        tracing::debug!("Recording attendance: id={}, class={}", id, class_code);

        // Composite primary key makes repeated marks a no-op
        sqlx::query(
            r#"
            INSERT INTO attendance (student_id, class_code)
            VALUES ($1, $2)
            ON CONFLICT (student_id, class_code) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(class_code)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn reset_all_statuses(&self) -> Result<u64> {
        let result = sqlx::query("UPDATE students SET status = $1")
            .bind(AttendanceStatus::Absent.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

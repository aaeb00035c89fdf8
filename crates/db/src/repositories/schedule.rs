use async_trait::async_trait;
use eyre::Result;

use rollcall_core::lifecycle::StatusChange;
use rollcall_core::models::class::ClassRecord;

use crate::DbPool;
use crate::models::DbClass;
use crate::store::ScheduleStore;

/// Postgres-backed schedule collection.
#[derive(Clone)]
pub struct PgScheduleStore {
    pool: DbPool,
}

impl PgScheduleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleStore for PgScheduleStore {
    async fn list_classes(&self) -> Result<Vec<ClassRecord>> {
        let rows = sqlx::query_as::<_, DbClass>(
            r#"
            SELECT code, subject, room, instructor, meeting_time, status, created_at
            FROM classes
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| row.into_record().map_err(Into::into))
            .collect()
    }

    async fn get_class(&self, code: &str) -> Result<Option<ClassRecord>> {
        tracing::debug!("Getting class by code: {}", code);

        let row = sqlx::query_as::<_, DbClass>(
            r#"
            SELECT code, subject, room, instructor, meeting_time, status, created_at
            FROM classes
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| row.into_record().map_err(Into::into))
            .transpose()
    }

    async fn insert_class(&self, record: &ClassRecord) -> Result<bool> {
        tracing::debug!("Inserting class: code={}", record.code);

        let result = sqlx::query(
            r#"
            INSERT INTO classes (code, subject, room, instructor, meeting_time, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .bind(&record.code)
        .bind(&record.subject)
        .bind(&record.room)
        .bind(&record.instructor)
        .bind(&record.time)
        .bind(record.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_class(&self, code: &str) -> Result<bool> {
        tracing::debug!("Deleting class: code={}", code);

        let result = sqlx::query("DELETE FROM classes WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn apply_status_changes(&self, changes: &[StatusChange]) -> Result<()> {
        if changes.is_empty() {
            return Ok(());
        }

        tracing::debug!("Applying {} class status change(s)", changes.len());

        // One transaction: observers never see a half-updated schedule.
        let mut tx = self.pool.begin().await?;

        for change in changes {
            sqlx::query("UPDATE classes SET status = $2 WHERE code = $1")
                .bind(&change.code)
                .bind(change.status.as_str())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

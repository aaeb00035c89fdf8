use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create students table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id VARCHAR(64) PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            password_hash VARCHAR(255) NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'Absent',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create classes table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS classes (
            code VARCHAR(64) PRIMARY KEY,
            subject VARCHAR(255) NOT NULL,
            room VARCHAR(64) NOT NULL,
            instructor VARCHAR(255) NOT NULL,
            meeting_time VARCHAR(64) NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'Upcoming',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create attendance history table. The composite key makes Present
    // marks idempotent per (student, class); class_code deliberately has no
    // foreign key so history survives deletion of the class.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            student_id VARCHAR(64) NOT NULL REFERENCES students(id),
            class_code VARCHAR(64) NOT NULL,
            marked_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (student_id, class_code)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for index in [
        "CREATE INDEX IF NOT EXISTS idx_students_created_at ON students(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_classes_created_at ON classes(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_attendance_student_id ON attendance(student_id)",
        "CREATE INDEX IF NOT EXISTS idx_attendance_class_code ON attendance(class_code)",
    ] {
        sqlx::query(index).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}

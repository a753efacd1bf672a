//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all housekeeping data.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run embedded migrations
    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
///
/// The natural keys (room_number + date) carry real UNIQUE constraints so the
/// status and checklist upserts stay atomic under concurrent writes.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS room_status (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            room_number TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'dirty',
            status_date TEXT NOT NULL,
            assigned_to INTEGER,
            updated_by INTEGER NOT NULL,
            updated_at TEXT NOT NULL,
            inspection_required INTEGER NOT NULL DEFAULT 0,
            priority TEXT NOT NULL DEFAULT 'normal',
            UNIQUE (room_number, status_date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS room_notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            room_number TEXT NOT NULL,
            note_date TEXT NOT NULL,
            note_text TEXT NOT NULL,
            note_type TEXT NOT NULL DEFAULT 'general',
            created_by INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            is_resolved INTEGER NOT NULL DEFAULT 0,
            resolved_by INTEGER,
            resolved_at TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cleaning_checklists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            room_number TEXT NOT NULL,
            checklist_date TEXT NOT NULL,
            checklist_type TEXT NOT NULL DEFAULT 'standard',
            items_json TEXT NOT NULL,
            completed_by INTEGER,
            completed_at TEXT,
            inspection_passed INTEGER,
            inspected_by INTEGER,
            inspected_at TEXT,
            inspection_notes TEXT,
            UNIQUE (room_number, checklist_date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            task_type TEXT NOT NULL DEFAULT 'general',
            room_number TEXT,
            assigned_to INTEGER,
            created_by INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            due_date TEXT,
            priority TEXT NOT NULL DEFAULT 'normal',
            status TEXT NOT NULL DEFAULT 'pending',
            completed_by INTEGER,
            completed_at TEXT,
            is_recurring INTEGER NOT NULL DEFAULT 0,
            recurrence_pattern TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for common queries
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_room_status_date ON room_status(status_date);
        CREATE INDEX IF NOT EXISTS idx_room_status_assigned ON room_status(assigned_to);
        CREATE INDEX IF NOT EXISTS idx_room_notes_date ON room_notes(note_date);
        CREATE INDEX IF NOT EXISTS idx_room_notes_room ON room_notes(room_number);
        CREATE INDEX IF NOT EXISTS idx_room_notes_resolved ON room_notes(is_resolved);
        CREATE INDEX IF NOT EXISTS idx_checklists_date ON cleaning_checklists(checklist_date);
        CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status);
        CREATE INDEX IF NOT EXISTS idx_tasks_due_date ON tasks(due_date);
        CREATE INDEX IF NOT EXISTS idx_tasks_assigned ON tasks(assigned_to);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

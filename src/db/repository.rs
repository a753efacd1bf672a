//! Database repository for CRUD operations.
//!
//! Uses prepared statements throughout; the status and checklist writes are
//! atomic upserts keyed on (room_number, date).

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    AddRoomNoteRequest, ChecklistItem, ChecklistRecord, CreateTaskRequest, RoomNoteRecord,
    RoomStatus, RoomStatusRecord, TaskRecord,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== ROOM STATUS OPERATIONS ====================

    /// List all status rows for a date, ordered by room number (lexical, to
    /// match how room numbers are stored).
    pub async fn list_room_status(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<RoomStatusRecord>, AppError> {
        let rows = sqlx::query(
            "SELECT id, room_number, status, status_date, assigned_to, updated_by, updated_at, \
             inspection_required, priority \
             FROM room_status WHERE status_date = ? ORDER BY room_number ASC",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(status_from_row).collect())
    }

    /// Status rows for a date indexed by room number, for the aggregated view.
    pub async fn room_status_by_room(
        &self,
        date: NaiveDate,
    ) -> Result<HashMap<String, RoomStatusRecord>, AppError> {
        let rows = self.list_room_status(date).await?;
        Ok(rows
            .into_iter()
            .map(|r| (r.room_number.clone(), r))
            .collect())
    }

    /// Set a room's status for a date. One atomic insert-or-update on the
    /// natural key; a repeated identical call leaves exactly one row.
    pub async fn upsert_room_status(
        &self,
        room_number: &str,
        status: RoomStatus,
        date: NaiveDate,
        inspection_required: bool,
        priority: &str,
        updated_by: i64,
    ) -> Result<(), AppError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO room_status \
             (room_number, status, status_date, updated_by, updated_at, inspection_required, priority) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT (room_number, status_date) DO UPDATE SET \
             status = excluded.status, \
             updated_by = excluded.updated_by, \
             updated_at = excluded.updated_at, \
             inspection_required = excluded.inspection_required, \
             priority = excluded.priority",
        )
        .bind(room_number)
        .bind(status.as_str())
        .bind(date)
        .bind(updated_by)
        .bind(&now)
        .bind(inspection_required as i32)
        .bind(priority)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Assign a room to a staff member for a date. Only touches an existing
    /// status row; returns how many rows were updated.
    pub async fn assign_room(
        &self,
        room_number: &str,
        date: NaiveDate,
        assigned_to: i64,
        updated_by: i64,
    ) -> Result<u64, AppError> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "UPDATE room_status SET assigned_to = ?, updated_by = ?, updated_at = ? \
             WHERE room_number = ? AND status_date = ?",
        )
        .bind(assigned_to)
        .bind(updated_by)
        .bind(&now)
        .bind(room_number)
        .bind(date)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    // ==================== NOTE OPERATIONS ====================

    /// List notes for a room and date, newest first.
    pub async fn list_room_notes(
        &self,
        room_number: &str,
        date: NaiveDate,
    ) -> Result<Vec<RoomNoteRecord>, AppError> {
        let rows = sqlx::query(
            "SELECT id, room_number, note_date, note_text, note_type, created_by, created_at, \
             is_resolved, resolved_by, resolved_at \
             FROM room_notes WHERE room_number = ? AND note_date = ? ORDER BY created_at DESC",
        )
        .bind(room_number)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    /// Add a note to a room; returns the new note id.
    pub async fn add_room_note(
        &self,
        request: &AddRoomNoteRequest,
        date: NaiveDate,
        created_by: i64,
    ) -> Result<i64, AppError> {
        let now = Utc::now().to_rfc3339();
        let note_type = request.note_type.as_deref().unwrap_or("general");

        let result = sqlx::query(
            "INSERT INTO room_notes (room_number, note_date, note_text, note_type, created_by, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&request.room_number)
        .bind(date)
        .bind(&request.note_text)
        .bind(note_type)
        .bind(created_by)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Get a note by id.
    pub async fn get_note(&self, id: i64) -> Result<Option<RoomNoteRecord>, AppError> {
        let row = sqlx::query(
            "SELECT id, room_number, note_date, note_text, note_type, created_by, created_at, \
             is_resolved, resolved_by, resolved_at \
             FROM room_notes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    /// Mark a note resolved. Resolution is monotonic: an already-resolved
    /// note is left untouched (resolver and timestamp keep their first
    /// values). Returns whether this call did the resolving.
    pub async fn resolve_note(&self, id: i64, resolved_by: i64) -> Result<bool, AppError> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "UPDATE room_notes SET is_resolved = 1, resolved_by = ?, resolved_at = ? \
             WHERE id = ? AND is_resolved = 0",
        )
        .bind(resolved_by)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Unresolved note counts for a date, grouped by room number.
    pub async fn unresolved_note_counts(
        &self,
        date: NaiveDate,
    ) -> Result<HashMap<String, i64>, AppError> {
        let rows = sqlx::query(
            "SELECT room_number, COUNT(*) AS note_count \
             FROM room_notes WHERE note_date = ? AND is_resolved = 0 \
             GROUP BY room_number",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.get("room_number"), row.get("note_count")))
            .collect())
    }

    // ==================== TASK OPERATIONS ====================

    /// List tasks with the given status, ordered by priority then due date.
    ///
    /// Priority is free text, so the DESC ordering is lexical, not semantic:
    /// `urgent` > `normal` > `low` > `high`.
    pub async fn list_tasks(&self, status: &str) -> Result<Vec<TaskRecord>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, description, task_type, room_number, assigned_to, created_by, \
             created_at, due_date, priority, status, completed_by, completed_at, is_recurring, \
             recurrence_pattern \
             FROM tasks WHERE status = ? ORDER BY priority DESC, due_date ASC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(task_from_row).collect())
    }

    /// Create a task; returns the new task id. The recurrence columns stay at
    /// their defaults (reserved).
    pub async fn create_task(
        &self,
        request: &CreateTaskRequest,
        created_by: i64,
    ) -> Result<i64, AppError> {
        let now = Utc::now().to_rfc3339();
        let task_type = request.task_type.as_deref().unwrap_or("general");
        let priority = request.priority.as_deref().unwrap_or("normal");

        let result = sqlx::query(
            "INSERT INTO tasks (title, description, task_type, room_number, assigned_to, \
             created_by, created_at, due_date, priority) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(task_type)
        .bind(&request.room_number)
        .bind(request.assigned_to)
        .bind(created_by)
        .bind(&now)
        .bind(&request.due_date)
        .bind(priority)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Mark a task completed. Returns false when no such task exists.
    pub async fn complete_task(&self, id: i64, completed_by: i64) -> Result<bool, AppError> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "UPDATE tasks SET status = 'completed', completed_by = ?, completed_at = ? \
             WHERE id = ?",
        )
        .bind(completed_by)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // ==================== CHECKLIST OPERATIONS ====================

    /// Get the checklist for a room and date, if one has been saved.
    pub async fn get_checklist(
        &self,
        room_number: &str,
        date: NaiveDate,
    ) -> Result<Option<ChecklistRecord>, AppError> {
        let row = sqlx::query(
            "SELECT id, room_number, checklist_date, checklist_type, items_json, completed_by, \
             completed_at, inspection_passed, inspected_by, inspected_at, inspection_notes \
             FROM cleaning_checklists WHERE room_number = ? AND checklist_date = ?",
        )
        .bind(room_number)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(checklist_from_row))
    }

    /// Save a room's checklist for a date. Atomic upsert on the natural key;
    /// stamps completed_by/completed_at, preserves any inspection fields.
    pub async fn upsert_checklist(
        &self,
        room_number: &str,
        date: NaiveDate,
        items: &[ChecklistItem],
        completed_by: i64,
    ) -> Result<(), AppError> {
        let now = Utc::now().to_rfc3339();
        let items_json = serde_json::to_string(items)?;

        sqlx::query(
            "INSERT INTO cleaning_checklists \
             (room_number, checklist_date, items_json, completed_by, completed_at) \
             VALUES (?, ?, ?, ?, ?) \
             ON CONFLICT (room_number, checklist_date) DO UPDATE SET \
             items_json = excluded.items_json, \
             completed_by = excluded.completed_by, \
             completed_at = excluded.completed_at",
        )
        .bind(room_number)
        .bind(date)
        .bind(&items_json)
        .bind(completed_by)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// Helper functions for row conversion

fn status_from_row(row: &sqlx::sqlite::SqliteRow) -> RoomStatusRecord {
    let status: String = row.get("status");
    let inspection_required: i32 = row.get("inspection_required");
    RoomStatusRecord {
        id: row.get("id"),
        room_number: row.get("room_number"),
        status: RoomStatus::from_str(&status).unwrap_or(RoomStatus::Dirty),
        status_date: row.get("status_date"),
        assigned_to: row.get("assigned_to"),
        updated_by: row.get("updated_by"),
        updated_at: row.get("updated_at"),
        inspection_required: inspection_required != 0,
        priority: row.get("priority"),
    }
}

fn note_from_row(row: &sqlx::sqlite::SqliteRow) -> RoomNoteRecord {
    let is_resolved: i32 = row.get("is_resolved");
    RoomNoteRecord {
        id: row.get("id"),
        room_number: row.get("room_number"),
        note_date: row.get("note_date"),
        note_text: row.get("note_text"),
        note_type: row.get("note_type"),
        created_by: row.get("created_by"),
        created_at: row.get("created_at"),
        is_resolved: is_resolved != 0,
        resolved_by: row.get("resolved_by"),
        resolved_at: row.get("resolved_at"),
    }
}

fn task_from_row(row: &sqlx::sqlite::SqliteRow) -> TaskRecord {
    let is_recurring: i32 = row.get("is_recurring");
    TaskRecord {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        task_type: row.get("task_type"),
        room_number: row.get("room_number"),
        assigned_to: row.get("assigned_to"),
        created_by: row.get("created_by"),
        created_at: row.get("created_at"),
        due_date: row.get("due_date"),
        priority: row.get("priority"),
        status: row.get("status"),
        completed_by: row.get("completed_by"),
        completed_at: row.get("completed_at"),
        is_recurring: is_recurring != 0,
        recurrence_pattern: row.get("recurrence_pattern"),
    }
}

fn checklist_from_row(row: &sqlx::sqlite::SqliteRow) -> ChecklistRecord {
    let items_json: String = row.get("items_json");
    let inspection_passed: Option<i32> = row.get("inspection_passed");
    ChecklistRecord {
        id: row.get("id"),
        room_number: row.get("room_number"),
        checklist_date: row.get("checklist_date"),
        checklist_type: row.get("checklist_type"),
        items: serde_json::from_str(&items_json).unwrap_or_default(),
        completed_by: row.get("completed_by"),
        completed_at: row.get("completed_at"),
        inspection_passed: inspection_passed.map(|v| v != 0),
        inspected_by: row.get("inspected_by"),
        inspected_at: row.get("inspected_at"),
        inspection_notes: row.get("inspection_notes"),
    }
}

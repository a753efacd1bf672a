//! Room note models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A note attached to a room for a given date. Resolution is monotonic: once
/// resolved, nothing in the API unresolves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomNoteRecord {
    pub id: i64,
    pub room_number: String,
    pub note_date: NaiveDate,
    pub note_text: String,
    pub note_type: String,
    pub created_by: i64,
    pub created_at: String,
    pub is_resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<String>,
}

/// Request body for adding a note to a room.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRoomNoteRequest {
    pub room_number: String,
    pub note_text: String,
    #[serde(default)]
    pub note_type: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

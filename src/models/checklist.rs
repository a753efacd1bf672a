//! Cleaning checklist models.
//!
//! Items are stored as a serialized JSON blob on the row; the API always
//! exposes them parsed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    #[serde(default)]
    pub done: bool,
}

/// A persisted checklist, unique per (room_number, checklist_date).
///
/// The inspection fields are written by supervisors after the clean; they stay
/// null until an inspection happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistRecord {
    pub id: i64,
    pub room_number: String,
    pub checklist_date: NaiveDate,
    pub checklist_type: String,
    pub items: Vec<ChecklistItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspection_passed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspected_by: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspected_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspection_notes: Option<String>,
}

/// Request body for saving a room's checklist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveChecklistRequest {
    pub room_number: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub items: Vec<ChecklistItem>,
}

/// Response payload for checklist reads. `checklist` is null when no row has
/// been saved yet; `items` then carries the default item labels, unchecked.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistResponse {
    pub checklist: Option<ChecklistRecord>,
    pub items: Vec<ChecklistItem>,
}

//! Room status models: the persisted per-day status row and the aggregated
//! room view merged with occupancy data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Housekeeping status of a room on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Clean,
    Dirty,
    Inspected,
    Occupied,
    OutOfOrder,
    Checkout,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Clean => "clean",
            RoomStatus::Dirty => "dirty",
            RoomStatus::Inspected => "inspected",
            RoomStatus::Occupied => "occupied",
            RoomStatus::OutOfOrder => "out_of_order",
            RoomStatus::Checkout => "checkout",
        }
    }

    /// Parse a status value from the wire, rejecting anything outside the
    /// known set.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "clean" => Some(RoomStatus::Clean),
            "dirty" => Some(RoomStatus::Dirty),
            "inspected" => Some(RoomStatus::Inspected),
            "occupied" => Some(RoomStatus::Occupied),
            "out_of_order" => Some(RoomStatus::OutOfOrder),
            "checkout" => Some(RoomStatus::Checkout),
            _ => None,
        }
    }
}

/// A persisted housekeeping status row, unique per (room_number, status_date).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStatusRecord {
    pub id: i64,
    pub room_number: String,
    pub status: RoomStatus,
    pub status_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    pub updated_by: i64,
    pub updated_at: String,
    pub inspection_required: bool,
    pub priority: String,
}

/// Request body for updating a room's housekeeping status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomStatusRequest {
    pub room_number: String,
    /// Validated against the known status set before the write.
    pub status: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub inspection_required: bool,
    #[serde(default)]
    pub priority: Option<String>,
}

/// Request body for assigning a room to a staff member.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoomRequest {
    pub room_number: String,
    pub assigned_to: i64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// One room in the aggregated daily view: occupancy merged with the stored
/// housekeeping status and the unresolved note count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    pub room_number: String,
    pub room_type: String,
    pub occupancy_status: String,
    pub guest_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkin_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_date: Option<NaiveDate>,
    pub housekeeping_status: RoomStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    pub priority: String,
    pub inspection_required: bool,
    pub notes_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

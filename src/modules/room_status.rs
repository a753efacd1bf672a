//! Room Status module.
//!
//! Declares the module's catalog entry and builds the aggregated daily room
//! view: occupancy data joined with stored housekeeping statuses and
//! unresolved note counts.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::auth::permissions;
use crate::db::Repository;
use crate::errors::AppError;
use crate::models::{ModuleConfig, RoomStatus, RoomStatusRecord, RoomView, TabConfig};
use crate::occupancy::{occupancy_status, OccupancyRecord, OccupancySource, SampleOccupancySource};

use super::Module;

/// The room status feature area: daily list, status filter, assignments.
pub struct RoomStatusModule;

impl Module for RoomStatusModule {
    fn config(&self) -> ModuleConfig {
        ModuleConfig {
            id: "room_status".to_string(),
            name: "Room Status".to_string(),
            icon: "hotel".to_string(),
            color: "#4caf50".to_string(),
            order: 10,
            permissions: vec![permissions::VIEW_ROOMS.to_string()],
            tabs: vec![
                TabConfig {
                    id: "daily_list".to_string(),
                    name: "Daily List".to_string(),
                    icon: "list".to_string(),
                    permissions: vec![permissions::VIEW_ROOMS.to_string()],
                },
                TabConfig {
                    id: "by_status".to_string(),
                    name: "By Status".to_string(),
                    icon: "filter_list".to_string(),
                    permissions: vec![permissions::VIEW_ROOMS.to_string()],
                },
                TabConfig {
                    id: "assignments".to_string(),
                    name: "Assignments".to_string(),
                    icon: "assignment_ind".to_string(),
                    permissions: vec![permissions::ASSIGN_ROOMS.to_string()],
                },
            ],
        }
    }
}

impl RoomStatusModule {
    /// The aggregated room list for a date.
    ///
    /// An unavailable occupancy integration degrades to the sample room set
    /// instead of failing the whole view.
    pub async fn room_list(
        &self,
        repo: &Repository,
        occupancy: &dyn OccupancySource,
        date: NaiveDate,
    ) -> Result<Vec<RoomView>, AppError> {
        let rooms = match occupancy.rooms_for_date(date) {
            Ok(rooms) => rooms,
            Err(AppError::IntegrationUnavailable(msg)) => {
                tracing::warn!("Occupancy source unavailable, using sample rooms: {}", msg);
                SampleOccupancySource.rooms_for_date(date)?
            }
            Err(e) => return Err(e),
        };

        let statuses = repo.room_status_by_room(date).await?;
        let note_counts = repo.unresolved_note_counts(date).await?;

        Ok(merge_room_views(rooms, &statuses, &note_counts, date))
    }
}

/// Join occupancy records with indexed statuses and note counts. Rooms with
/// no status row default to dirty / normal priority / no inspection; rooms
/// with no notes count zero. Output keeps the occupancy source's order.
fn merge_room_views(
    rooms: Vec<OccupancyRecord>,
    statuses: &HashMap<String, RoomStatusRecord>,
    note_counts: &HashMap<String, i64>,
    date: NaiveDate,
) -> Vec<RoomView> {
    rooms
        .into_iter()
        .map(|room| {
            let status = statuses.get(&room.room_number);
            RoomView {
                occupancy_status: occupancy_status(&room, date),
                housekeeping_status: status.map(|s| s.status).unwrap_or(RoomStatus::Dirty),
                assigned_to: status.and_then(|s| s.assigned_to),
                priority: status
                    .map(|s| s.priority.clone())
                    .unwrap_or_else(|| "normal".to_string()),
                inspection_required: status.map(|s| s.inspection_required).unwrap_or(false),
                notes_count: note_counts.get(&room.room_number).copied().unwrap_or(0),
                updated_at: status.map(|s| s.updated_at.clone()),
                room_number: room.room_number,
                room_type: room.room_type,
                guest_name: room.guest_name,
                checkin_date: room.checkin_date,
                checkout_date: room.checkout_date,
            }
        })
        .collect()
}

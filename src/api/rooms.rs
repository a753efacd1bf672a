//! Room status API endpoints.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Serialize;

use super::{date_or_today, success, ApiResult, DateQuery, Message};
use crate::auth::{permissions, Identity};
use crate::errors::AppError;
use crate::models::{
    AssignRoomRequest, RoomStatus, RoomStatusRecord, RoomView, UpdateRoomStatusRequest,
};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct RoomViewList {
    pub rooms: Vec<RoomView>,
}

#[derive(Debug, Serialize)]
pub struct RoomStatusList {
    pub rooms: Vec<RoomStatusRecord>,
}

/// GET /api/rooms - Aggregated daily room view (occupancy + status + notes).
pub async fn get_rooms(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<DateQuery>,
) -> ApiResult<RoomViewList> {
    state
        .oracle
        .require(identity.user_id, permissions::VIEW_ROOMS)?;

    let date = date_or_today(query.date);
    let rooms = state
        .room_status
        .room_list(&state.repo, state.occupancy.as_ref(), date)
        .await?;

    success(RoomViewList { rooms })
}

/// GET /api/rooms/status - Stored status rows for a date.
pub async fn get_room_status(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<DateQuery>,
) -> ApiResult<RoomStatusList> {
    state
        .oracle
        .require(identity.user_id, permissions::VIEW_ROOMS)?;

    let date = date_or_today(query.date);
    let rooms = state.repo.list_room_status(date).await?;

    success(RoomStatusList { rooms })
}

/// POST /api/rooms/status - Set a room's status for a date (upsert).
pub async fn update_room_status(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<UpdateRoomStatusRequest>,
) -> ApiResult<Message> {
    state
        .oracle
        .require(identity.user_id, permissions::UPDATE_STATUS)?;

    if request.room_number.trim().is_empty() {
        return Err(AppError::Validation("Room number is required".to_string()));
    }

    let status = RoomStatus::from_str(&request.status)
        .ok_or_else(|| AppError::Validation("Invalid status".to_string()))?;

    let date = date_or_today(request.date);
    let priority = request.priority.as_deref().unwrap_or("normal");

    state
        .repo
        .upsert_room_status(
            &request.room_number,
            status,
            date,
            request.inspection_required,
            priority,
            identity.user_id,
        )
        .await?;

    success(Message::new("Status updated successfully"))
}

/// POST /api/rooms/assign - Assign a room to a staff member.
pub async fn assign_room(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<AssignRoomRequest>,
) -> ApiResult<Message> {
    state
        .oracle
        .require(identity.user_id, permissions::ASSIGN_ROOMS)?;

    if request.room_number.trim().is_empty() {
        return Err(AppError::Validation("Room number is required".to_string()));
    }

    let date = date_or_today(request.date);
    let updated = state
        .repo
        .assign_room(
            &request.room_number,
            date,
            request.assigned_to,
            identity.user_id,
        )
        .await?;

    // Assigning a room with no status row for the date is a no-op; the
    // client treats both cases the same.
    if updated == 0 {
        tracing::debug!(
            "Assignment for room {} on {} matched no status row",
            request.room_number,
            date
        );
    }

    success(Message::new("Room assigned successfully"))
}

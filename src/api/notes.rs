//! Room note API endpoints.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Serialize;

use super::{date_or_today, success, ApiResult, Message, RoomDateQuery};
use crate::auth::{permissions, Identity};
use crate::errors::AppError;
use crate::models::{AddRoomNoteRequest, RoomNoteRecord};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct NoteList {
    pub notes: Vec<RoomNoteRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteCreated {
    pub message: String,
    pub note_id: i64,
}

/// GET /api/rooms/notes - Notes for a room and date, newest first.
pub async fn get_room_notes(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<RoomDateQuery>,
) -> ApiResult<NoteList> {
    state
        .oracle
        .require(identity.user_id, permissions::VIEW_ROOMS)?;

    let date = date_or_today(query.date);
    let notes = state.repo.list_room_notes(&query.room_number, date).await?;

    success(NoteList { notes })
}

/// POST /api/rooms/notes - Add a note to a room.
pub async fn add_room_note(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<AddRoomNoteRequest>,
) -> ApiResult<NoteCreated> {
    state
        .oracle
        .require(identity.user_id, permissions::ADD_NOTES)?;

    if request.room_number.trim().is_empty() {
        return Err(AppError::Validation("Room number is required".to_string()));
    }
    if request.note_text.trim().is_empty() {
        return Err(AppError::Validation("Note text is required".to_string()));
    }

    let date = date_or_today(request.date);
    let note_id = state
        .repo
        .add_room_note(&request, date, identity.user_id)
        .await?;

    success(NoteCreated {
        message: "Note added successfully".to_string(),
        note_id,
    })
}

/// POST /api/notes/:id/resolve - Mark a note resolved.
///
/// Resolution is monotonic: resolving an already-resolved note succeeds
/// without touching the stored resolver.
pub async fn resolve_note(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
) -> ApiResult<Message> {
    state
        .oracle
        .require(identity.user_id, permissions::ADD_NOTES)?;

    let resolved_now = state.repo.resolve_note(id, identity.user_id).await?;

    if !resolved_now && state.repo.get_note(id).await?.is_none() {
        return Err(AppError::NotFound(format!("Note {} not found", id)));
    }

    success(Message::new("Note resolved"))
}

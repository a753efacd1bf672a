//! Cleaning checklist API endpoints.

use axum::{
    extract::{Query, State},
    Extension, Json,
};

use super::{date_or_today, success, ApiResult, Message, RoomDateQuery};
use crate::auth::{permissions, Identity};
use crate::config::DEFAULT_CHECKLIST_ITEMS;
use crate::errors::AppError;
use crate::models::{ChecklistItem, ChecklistResponse, SaveChecklistRequest};
use crate::AppState;

/// GET /api/checklists - Checklist for a room and date.
///
/// A room with no saved checklist answers with a null checklist and the
/// default item labels, unchecked.
pub async fn get_checklist(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<RoomDateQuery>,
) -> ApiResult<ChecklistResponse> {
    state
        .oracle
        .require(identity.user_id, permissions::VIEW_CHECKLIST)?;

    let date = date_or_today(query.date);

    let response = match state.repo.get_checklist(&query.room_number, date).await? {
        Some(checklist) => ChecklistResponse {
            items: checklist.items.clone(),
            checklist: Some(checklist),
        },
        None => ChecklistResponse {
            checklist: None,
            items: DEFAULT_CHECKLIST_ITEMS
                .iter()
                .map(|label| ChecklistItem {
                    label: label.to_string(),
                    done: false,
                })
                .collect(),
        },
    };

    success(response)
}

/// POST /api/checklists - Save a room's checklist for a date (upsert).
pub async fn save_checklist(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<SaveChecklistRequest>,
) -> ApiResult<Message> {
    state
        .oracle
        .require(identity.user_id, permissions::COMPLETE_TASKS)?;

    if request.room_number.trim().is_empty() {
        return Err(AppError::Validation("Room number is required".to_string()));
    }

    let date = date_or_today(request.date);
    state
        .repo
        .upsert_checklist(&request.room_number, date, &request.items, identity.user_id)
        .await?;

    success(Message::new("Checklist saved successfully"))
}

//! JSON API module.
//!
//! Contains all routes and handlers behind the dispatcher contract: every
//! operation validates the caller, checks one permission, performs one store
//! operation, and answers in the `{success, data}` envelope.

mod checklists;
mod modules;
mod notes;
mod pwa;
mod rooms;
mod tasks;

pub use checklists::*;
pub use modules::*;
pub use notes::*;
pub use pwa::*;
pub use rooms::*;
pub use tasks::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that is either a success envelope or an error envelope.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Payload carrying only a human-readable confirmation.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Query string with an optional date, defaulting to today.
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Query string addressing a room on a date.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDateQuery {
    pub room_number: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Resolve an optional request date to a concrete one (today when omitted).
pub fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Utc::now().date_naive())
}

//! Module catalog endpoint.

use axum::{extract::State, Extension};
use serde::Serialize;

use super::{success, ApiResult};
use crate::auth::Identity;
use crate::models::ModuleView;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ModuleList {
    pub modules: Vec<ModuleView>,
}

/// GET /api/modules - Modules visible to the caller, tabs already filtered.
///
/// Only requires authentication; the per-module gates do the filtering.
pub async fn get_modules(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<ModuleList> {
    let modules = state
        .registry
        .modules_for_user(identity.user_id, state.oracle.as_ref());

    success(ModuleList { modules })
}

//! Module catalog: registration and per-user filtering.
//!
//! The registry is an explicit object owned by application state and built
//! once at startup. Each module implements the `Module` trait and registers
//! the configuration it declares; there is no name-derived dispatch.

pub mod room_status;

use std::sync::Arc;

use crate::auth::PermissionOracle;
use crate::errors::AppError;
use crate::models::{ModuleConfig, ModuleView, TabConfig};

/// A pluggable feature area of the app.
pub trait Module: Send + Sync {
    /// Static configuration: id, display name, ordering, permission gates,
    /// tabs.
    fn config(&self) -> ModuleConfig;
}

/// In-process catalog of registered modules. Holds the configs the modules
/// declare; the module instances themselves stay with whoever wires routes.
#[derive(Default)]
pub struct ModuleRegistry {
    // Insertion order doubles as the tie-breaker for equal `order` values.
    entries: Vec<ModuleConfig>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module. A module with an empty id is rejected;
    /// re-registering an id replaces the earlier registration in place
    /// (last writer wins, original position kept).
    pub fn register(&mut self, module: Arc<dyn Module>) -> Result<(), AppError> {
        let config = module.config();

        if config.id.trim().is_empty() {
            return Err(AppError::Validation("Module must have an ID".to_string()));
        }

        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == config.id) {
            *existing = config;
        } else {
            self.entries.push(config);
        }

        Ok(())
    }

    /// The modules a user may see, with tabs filtered per user.
    ///
    /// Module and tab gates are independent any-of checks: the user needs at
    /// least one of the listed permissions, and an empty list passes. A
    /// module whose tabs all filter out is still included with an empty tab
    /// list. Output is sorted by `order` ascending; the sort is stable, so
    /// equal orders keep registration order.
    pub fn modules_for_user(&self, user_id: i64, oracle: &dyn PermissionOracle) -> Vec<ModuleView> {
        let mut visible: Vec<ModuleView> = self
            .entries
            .iter()
            .filter(|config| holds_any(oracle, user_id, &config.permissions))
            .map(|config| {
                let tabs: Vec<TabConfig> = config
                    .tabs
                    .iter()
                    .filter(|tab| holds_any(oracle, user_id, &tab.permissions))
                    .cloned()
                    .collect();

                ModuleView {
                    id: config.id.clone(),
                    name: config.name.clone(),
                    icon: config.icon.clone(),
                    color: config.color.clone(),
                    order: config.order,
                    tabs,
                }
            })
            .collect();

        visible.sort_by_key(|m| m.order);
        visible
    }
}

/// Any-of permission check; an empty requirement list always passes.
fn holds_any(oracle: &dyn PermissionOracle, user_id: i64, permissions: &[String]) -> bool {
    permissions.is_empty() || permissions.iter().any(|p| oracle.has(user_id, p))
}

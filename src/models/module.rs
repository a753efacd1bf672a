//! Module catalog models.
//!
//! A module is a pluggable feature area with its own tabs. Module and tab
//! visibility are gated by permissions with any-of semantics: holding one of
//! the listed permissions is enough, and an empty list means always visible.

use serde::{Deserialize, Serialize};

/// A tab inside a module. Tabs keep their declared order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabConfig {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing)]
    pub permissions: Vec<String>,
}

/// Static configuration a module declares about itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub order: i32,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub tabs: Vec<TabConfig>,
}

impl ModuleConfig {
    /// New config with the catalog defaults (icon `list`, color `#2196f3`,
    /// order 100, no permission gate, no tabs).
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: "list".to_string(),
            color: "#2196f3".to_string(),
            order: 100,
            permissions: Vec::new(),
            tabs: Vec::new(),
        }
    }
}

/// A module as seen by one user: same shape as the config, tabs already
/// filtered down to what the user may open.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleView {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub order: i32,
    pub tabs: Vec<TabConfig>,
}

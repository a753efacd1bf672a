//! Data models for the housekeeping backend.
//!
//! These models match the app client's wire format (camelCase JSON).

mod checklist;
mod module;
mod note;
mod room;
mod task;

pub use checklist::*;
pub use module::*;
pub use note::*;
pub use room::*;
pub use task::*;

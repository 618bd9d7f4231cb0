//! Selection module - tracks which goal is active for display.

mod selection_service;

pub use selection_service::GoalSelection;

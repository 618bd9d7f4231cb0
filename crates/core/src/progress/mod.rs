//! Progress module - reduces a goal and its schedule to aggregate figures.

mod progress_model;
mod progress_service;

#[cfg(test)]
mod progress_service_tests;

pub use progress_model::{GoalOverview, GoalProgress};
pub use progress_service::{current_index, progress};

//! Schedule module - derives the stepping-stone view of a goal.

mod schedule_model;
mod schedule_service;


pub use schedule_model::{SteppingStone, StoneStatus};
pub use schedule_service::{generate_schedule, saved_steps, step_count, stone_amount, stone_due_date};

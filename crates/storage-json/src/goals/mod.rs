//! Goal persistence backed by a single JSON file.

mod repository;

pub use repository::JsonGoalRepository;

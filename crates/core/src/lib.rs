//! Flightpath Core - Domain entities, services, and traits.
//!
//! This crate contains the goal progression engine for Flightpath.
//! It is storage-agnostic and defines the persistence port that is
//! implemented by the `storage-json` crate.

pub mod constants;
pub mod errors;
pub mod events;
pub mod goals;
pub mod progress;
pub mod rewards;
pub mod schedule;
pub mod selection;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

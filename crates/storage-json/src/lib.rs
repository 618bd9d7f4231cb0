//! Flightpath JSON storage - file-backed goal persistence.
//!
//! Implements the persistence port defined in `flightpath-core` against a
//! single JSON file, replacing the browser-local key-value store the
//! original web client relied on.

pub mod goals;

pub use goals::JsonGoalRepository;

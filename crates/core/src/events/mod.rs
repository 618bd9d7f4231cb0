//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events
//! after successful domain mutations. UI adapters implement the sink to
//! translate events into platform-specific actions (re-render, confetti,
//! badge toast, storage warning).

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;

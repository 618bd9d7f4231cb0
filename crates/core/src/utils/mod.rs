pub mod id_utils;
pub mod time_utils;

pub use id_utils::{IdProviderTrait, SequentialIdProvider, UuidIdProvider};
pub use time_utils::{ClockTrait, FixedClock, SystemClock};

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Trait supplying unique goal identifiers at creation time.
///
/// Implementations must guarantee uniqueness within a single store
/// lifetime; ids are never reused.
pub trait IdProviderTrait: Send + Sync {
    fn next_id(&self) -> String;
}

/// Production id provider backed by random UUIDs.
#[derive(Clone, Default)]
pub struct UuidIdProvider;

impl IdProviderTrait for UuidIdProvider {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic id provider for tests: `goal-1`, `goal-2`, ...
#[derive(Default)]
pub struct SequentialIdProvider {
    counter: AtomicU64,
}

impl IdProviderTrait for SequentialIdProvider {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("goal-{}", n)
    }
}

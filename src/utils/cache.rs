use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Single-slot memoization with a fixed time-to-live. Entries are served
/// until they age out; there is no eviction beyond the clock. A poisoned
/// lock degrades to a miss rather than taking the request down.
pub struct TtlCache<T> {
    ttl: Duration,
    slot: Mutex<Option<(Instant, T)>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    pub fn get(&self) -> Option<T> {
        let slot = self.slot.lock().ok()?;
        match slot.as_ref() {
            Some((stored_at, value)) if stored_at.elapsed() < self.ttl => Some(value.clone()),
            _ => None,
        }
    }

    pub fn put(&self, value: T) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some((Instant::now(), value));
        }
    }
}

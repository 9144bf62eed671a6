//! Time-derived record keys
//!
//! New records get the current epoch milliseconds as their key, the way
//! the console always minted them. Two adds within the same millisecond
//! must still differ, so keys are forced strictly increasing per store
//! and any value already taken by seeded data is skipped.

use chrono::Utc;
use wewin_core::RecordKey;

/// Per-store key source
#[derive(Debug, Clone, Default)]
pub struct KeyGenerator {
    /// Last value handed out (0 before the first key)
    last: i64,
}

impl KeyGenerator {
    /// Create a generator that has not issued any keys yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Next key from the wall clock
    ///
    /// `taken` reports whether a candidate is already used in the store.
    pub fn next_key(&mut self, taken: impl Fn(&str) -> bool) -> RecordKey {
        self.next_key_at(Utc::now().timestamp_millis(), taken)
    }

    /// Next key for a given clock reading
    pub fn next_key_at(&mut self, now_millis: i64, taken: impl Fn(&str) -> bool) -> RecordKey {
        let mut candidate = now_millis.max(self.last + 1);
        while taken(&candidate.to_string()) {
            candidate += 1;
        }
        self.last = candidate;
        RecordKey::new(candidate.to_string())
    }
}

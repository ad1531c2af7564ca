//! Rate-limited debug logging.
//!
//! Each [`DebugLog`] owns a small suppression cache keyed on
//! `message + payload`. Repeating the same pair inside the window emits
//! nothing. The cache is bounded; the oldest key is evicted first.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use serde_json::Value;

pub const DEFAULT_DEDUP_WINDOW: Duration = Duration::from_millis(100);
pub const DEFAULT_DEDUP_CAPACITY: usize = 256;

pub struct DebugLog {
    source: String,
    window: Duration,
    capacity: usize,
    seen: HashMap<String, Instant>,
    order: VecDeque<String>,
}

impl DebugLog {
    pub fn new(source: impl Into<String>, window: Duration, capacity: usize) -> Self {
        Self {
            source: source.into(),
            window,
            capacity: capacity.max(1),
            seen: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn with_defaults(source: impl Into<String>) -> Self {
        Self::new(source, DEFAULT_DEDUP_WINDOW, DEFAULT_DEDUP_CAPACITY)
    }

    /// Emit `message` with `payload` unless the same pair was logged within the window.
    ///
    /// Returns `true` if the event was emitted.
    pub fn debug(&mut self, message: &str, payload: Value) -> bool {
        self.debug_at(message, payload, Instant::now())
    }

    pub fn debug_at(&mut self, message: &str, payload: Value, now: Instant) -> bool {
        let key = format!("{message}-{payload}");
        if !self.admit(key, now) {
            return false;
        }
        if payload.is_null() {
            tracing::debug!(source = %self.source, "{message}");
        } else {
            tracing::debug!(source = %self.source, %payload, "{message}");
        }
        true
    }

    /// Number of keys currently suppressed.
    pub fn suppressed_len(&self) -> usize {
        self.seen.len()
    }

    fn admit(&mut self, key: String, now: Instant) -> bool {
        self.evict_expired(now);
        if self.seen.contains_key(&key) {
            return false;
        }
        while self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.seen.remove(&oldest);
            }
        }
        self.seen.insert(key.clone(), now);
        self.order.push_back(key);
        true
    }

    // Keys share one window and are inserted in time order, so expired keys
    // always form a prefix of `order`.
    fn evict_expired(&mut self, now: Instant) {
        while let Some(front) = self.order.front() {
            let expired = self
                .seen
                .get(front)
                .map(|t| now.saturating_duration_since(*t) >= self.window)
                .unwrap_or(true);
            if !expired {
                break;
            }
            if let Some(key) = self.order.pop_front() {
                self.seen.remove(&key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repeated_message_is_suppressed_within_window() {
        let mut log = DebugLog::with_defaults("test");
        let t0 = Instant::now();
        assert!(log.debug_at("Video loaded", json!({"width": 640}), t0));
        assert!(!log.debug_at(
            "Video loaded",
            json!({"width": 640}),
            t0 + Duration::from_millis(50)
        ));
    }

    #[test]
    fn different_payload_is_not_suppressed() {
        let mut log = DebugLog::with_defaults("test");
        let t0 = Instant::now();
        assert!(log.debug_at("Hand data", json!({"x": 1}), t0));
        assert!(log.debug_at("Hand data", json!({"x": 2}), t0));
        assert!(log.debug_at("Hand data", Value::Null, t0));
    }

    #[test]
    fn message_is_emitted_again_after_window() {
        let mut log = DebugLog::new("test", Duration::from_millis(100), 8);
        let t0 = Instant::now();
        assert!(log.debug_at("tick", Value::Null, t0));
        assert!(log.debug_at("tick", Value::Null, t0 + Duration::from_millis(100)));
        assert_eq!(log.suppressed_len(), 1);
    }

    #[test]
    fn capacity_evicts_oldest_key() {
        let mut log = DebugLog::new("test", Duration::from_secs(60), 2);
        let t0 = Instant::now();
        assert!(log.debug_at("a", Value::Null, t0));
        assert!(log.debug_at("b", Value::Null, t0));
        assert!(log.debug_at("c", Value::Null, t0));
        assert_eq!(log.suppressed_len(), 2);
        // "a" was evicted, so it is admitted again; "c" is still suppressed
        assert!(log.debug_at("a", Value::Null, t0));
        assert!(!log.debug_at("c", Value::Null, t0));
    }

    #[test]
    fn zero_capacity_is_treated_as_one() {
        let mut log = DebugLog::new("test", Duration::from_secs(60), 0);
        let t0 = Instant::now();
        assert!(log.debug_at("a", Value::Null, t0));
        assert!(!log.debug_at("a", Value::Null, t0));
    }
}

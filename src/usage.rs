//! Free-tier usage accounting.
//!
//! Counting is keyed by (user, feature, UTC day) behind a trait so the
//! surrounding system can swap in a persistence-backed implementation; the
//! in-memory tracker here is for single-process use and tests.

use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// Per-user, per-feature, per-day usage counter.
pub trait UsageTracker: Send + Sync {
    /// Record one use for today and return the new count.
    fn record(&self, user: &str, feature: &str) -> u32;

    /// Today's count so far.
    fn count(&self, user: &str, feature: &str) -> u32;

    /// Uses left under `limit` today, saturating at zero.
    fn remaining(&self, user: &str, feature: &str, limit: u32) -> u32 {
        limit.saturating_sub(self.count(user, feature))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct UsageKey {
    user: String,
    feature: String,
    day: NaiveDate,
}

/// In-memory tracker. Counts reset implicitly when the day rolls over and do
/// not survive a process restart.
#[derive(Debug, Default)]
pub struct MemoryUsageTracker {
    counts: Mutex<HashMap<UsageKey, u32>>,
}

impl MemoryUsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn record_on(&self, user: &str, feature: &str, day: NaiveDate) -> u32 {
        let key = UsageKey {
            user: user.to_string(),
            feature: feature.to_string(),
            day,
        };
        let mut counts = self.counts.lock().expect("usage lock poisoned");
        let entry = counts.entry(key).or_insert(0);
        *entry += 1;
        *entry
    }

    fn count_on(&self, user: &str, feature: &str, day: NaiveDate) -> u32 {
        let key = UsageKey {
            user: user.to_string(),
            feature: feature.to_string(),
            day,
        };
        let counts = self.counts.lock().expect("usage lock poisoned");
        counts.get(&key).copied().unwrap_or(0)
    }
}

impl UsageTracker for MemoryUsageTracker {
    fn record(&self, user: &str, feature: &str) -> u32 {
        self.record_on(user, feature, Utc::now().date_naive())
    }

    fn count(&self, user: &str, feature: &str) -> u32 {
        self.count_on(user, feature, Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn records_accumulate_per_key() {
        let tracker = MemoryUsageTracker::new();
        let d = day("2025-06-01");
        assert_eq!(tracker.record_on("ani", "analisis", d), 1);
        assert_eq!(tracker.record_on("ani", "analisis", d), 2);
        assert_eq!(tracker.count_on("ani", "analisis", d), 2);
    }

    #[test]
    fn users_and_features_are_isolated() {
        let tracker = MemoryUsageTracker::new();
        let d = day("2025-06-01");
        tracker.record_on("ani", "analisis", d);
        assert_eq!(tracker.count_on("budi", "analisis", d), 0);
        assert_eq!(tracker.count_on("ani", "cuaca", d), 0);
    }

    #[test]
    fn days_are_isolated() {
        let tracker = MemoryUsageTracker::new();
        tracker.record_on("ani", "analisis", day("2025-06-01"));
        assert_eq!(tracker.count_on("ani", "analisis", day("2025-06-02")), 0);
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let tracker = MemoryUsageTracker::new();
        for _ in 0..5 {
            tracker.record("ani", "analisis");
        }
        assert_eq!(tracker.remaining("ani", "analisis", 3), 0);
        assert_eq!(tracker.remaining("ani", "analisis", 10), 5);
    }

    #[test]
    fn trait_object_usable_behind_dyn() {
        let tracker: Box<dyn UsageTracker> = Box::new(MemoryUsageTracker::new());
        tracker.record("ani", "analisis");
        assert_eq!(tracker.count("ani", "analisis"), 1);
        assert_eq!(tracker.remaining("ani", "analisis", 10), 9);
    }
}

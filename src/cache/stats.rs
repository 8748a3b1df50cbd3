//! Layout cache statistics for diagnostics and tests.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Snapshot of cache activity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Lookups answered from a stored layout.
    pub hits: u64,

    /// Lookups that found no stored layout.
    pub misses: u64,

    /// Times the underlying builder ran.
    pub builds: u64,

    /// Layouts built but not stored because the cache was full.
    pub uncached: u64,
}

impl CacheStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total lookups.
    #[must_use]
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Every counter with its name, in declaration order.
    #[must_use]
    pub fn counters(&self) -> [(&'static str, u64); 4] {
        [
            ("hits", self.hits),
            ("misses", self.misses),
            ("builds", self.builds),
            ("uncached", self.uncached),
        ]
    }

    /// Fraction of lookups served from the cache.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.lookups() == 0 {
            0.0
        } else {
            self.hits as f64 / self.lookups() as f64
        }
    }
}

/// Live counters behind `CacheStats`.
#[derive(Debug, Default)]
pub(crate) struct StatCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    builds: AtomicU64,
    uncached: AtomicU64,
}

impl StatCounters {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_build(&self) {
        self.builds.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_uncached(&self) {
        self.uncached.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            builds: self.builds.load(Ordering::Relaxed),
            uncached: self.uncached.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = CacheStats::new();
        assert_eq!(stats.lookups(), 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate() {
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            builds: 1,
            uncached: 0,
        };
        assert_eq!(stats.lookups(), 4);
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_named_counters() {
        let stats = CacheStats {
            hits: 5,
            misses: 4,
            builds: 3,
            uncached: 2,
        };
        assert_eq!(
            stats.counters(),
            [("hits", 5), ("misses", 4), ("builds", 3), ("uncached", 2)]
        );
    }

    #[test]
    fn test_counters_snapshot() {
        let counters = StatCounters::default();
        counters.record_miss();
        counters.record_build();
        counters.record_hit();
        counters.record_hit();

        let stats = counters.snapshot();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.builds, 1);
        assert_eq!(stats.uncached, 0);
    }

    #[test]
    fn test_stats_serialization() {
        let stats = CacheStats {
            hits: 42,
            ..CacheStats::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: CacheStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, deserialized);
    }
}

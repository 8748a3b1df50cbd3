//! Layout cache configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a `LayoutCache`.
///
/// The key space is small in practice (one entry per distinct icon count),
/// so the default is an unbounded cache.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of stored layouts (`None` = unlimited).
    ///
    /// The cap is soft: concurrent first accesses may overshoot it by a few
    /// entries. Once reached, new icon counts are built on every request
    /// and not stored. Nothing is ever evicted.
    pub max_entries: Option<usize>,

    /// Number of entries to reserve up front.
    pub initial_capacity: usize,
}

impl CacheConfig {
    /// Create a config for an unbounded cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of stored layouts.
    #[must_use]
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = Some(max);
        self
    }

    /// Reserve room for `capacity` layouts.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Check whether a cache holding `len` entries may store another one.
    #[must_use]
    pub fn admits(&self, len: usize) -> bool {
        self.max_entries.map_or(true, |max| len < max)
    }
}

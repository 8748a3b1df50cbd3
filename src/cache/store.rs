//! Memoizing pip layout cache.
//!
//! Layouts are keyed by icon count and never evicted. The map is a
//! `DashMap`, and new entries go in through its entry API, so the build
//! for a missing key runs while that key's shard is write-locked: two
//! threads asking for the same new count build it once, and nobody ever
//! sees a half-built layout.
//!
//! ```
//! use card_pips::cache::LayoutCache;
//! use card_pips::core::IconCount;
//!
//! let cache = LayoutCache::new();
//! let first = cache.get(IconCount::new(7));
//! let second = cache.get(IconCount::new(7));
//!
//! assert_eq!(first, second);
//! assert_eq!(cache.stats().builds, 1);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use std::hash::BuildHasherDefault;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use rustc_hash::FxHasher;
use tracing::{debug, trace, warn};

use super::stats::{CacheStats, StatCounters};
use crate::core::{CacheConfig, IconCount};
use crate::layout::{LayoutBuilder, PipLayout, StandardLayout};

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Thread-safe map from icon count to its pip layout.
pub struct LayoutCache<B = StandardLayout> {
    entries: DashMap<IconCount, Arc<PipLayout>, FxBuildHasher>,
    builder: B,
    config: CacheConfig,
    counters: StatCounters,
    full_reported: AtomicBool,
}

impl LayoutCache {
    /// Create an unbounded cache over the conventional layout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create a cache over the conventional layout.
    #[must_use]
    pub fn with_config(config: CacheConfig) -> Self {
        Self::with_builder(StandardLayout, config)
    }
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: LayoutBuilder> LayoutCache<B> {
    /// Create a cache that builds layouts with `builder`.
    pub fn with_builder(builder: B, config: CacheConfig) -> Self {
        Self {
            entries: DashMap::with_capacity_and_hasher(
                config.initial_capacity,
                FxBuildHasher::default(),
            ),
            builder,
            config,
            counters: StatCounters::default(),
            full_reported: AtomicBool::new(false),
        }
    }

    /// Get the layout for `icon_count`, building and storing it on first use.
    ///
    /// If the cache is at its configured cap the layout is built and
    /// returned without being stored.
    ///
    /// The builder runs under this key's shard lock; it must not call back
    /// into this cache.
    pub fn get(&self, icon_count: IconCount) -> Arc<PipLayout> {
        if let Some(entry) = self.entries.get(&icon_count) {
            self.counters.record_hit();
            trace!(%icon_count, "pip layout cache hit");
            return Arc::clone(entry.value());
        }
        self.counters.record_miss();

        if !self.config.admits(self.entries.len()) {
            if !self.full_reported.swap(true, Ordering::Relaxed) {
                warn!(
                    max_entries = ?self.config.max_entries,
                    "pip layout cache is full, new layouts will not be stored"
                );
            }
            self.counters.record_uncached();
            return Arc::new(self.build(icon_count));
        }

        Arc::clone(
            self.entries
                .entry(icon_count)
                .or_insert_with(|| Arc::new(self.build(icon_count)))
                .value(),
        )
    }

    /// Populate the cache for every count in `counts`.
    pub fn warm<I>(&self, counts: I)
    where
        I: IntoIterator<Item = IconCount>,
    {
        for icon_count in counts {
            self.get(icon_count);
        }
    }

    /// Check whether a layout for `icon_count` is stored.
    #[must_use]
    pub fn contains(&self, icon_count: IconCount) -> bool {
        self.entries.contains_key(&icon_count)
    }

    /// Number of stored layouts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of hit/miss/build counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot()
    }

    /// The configuration this cache was created with.
    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// The builder behind this cache.
    #[must_use]
    pub fn builder(&self) -> &B {
        &self.builder
    }

    fn build(&self, icon_count: IconCount) -> PipLayout {
        self.counters.record_build();
        debug!(%icon_count, "building pip layout");
        self.builder.build(icon_count)
    }
}

impl<B> std::fmt::Debug for LayoutCache<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutCache")
            .field("len", &self.entries.len())
            .field("config", &self.config)
            .field("stats", &self.counters.snapshot())
            .finish_non_exhaustive()
    }
}

//! Process-wide layout cache.
//!
//! Created on first use and kept for the life of the process.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::store::LayoutCache;
use crate::core::IconCount;
use crate::layout::PipLayout;

static SHARED_CACHE: Lazy<LayoutCache> = Lazy::new(LayoutCache::new);

/// The process-wide cache.
pub fn shared() -> &'static LayoutCache {
    &SHARED_CACHE
}

/// Layout for `icon_count` from the process-wide cache.
pub fn layout_for(icon_count: IconCount) -> Arc<PipLayout> {
    SHARED_CACHE.get(icon_count)
}

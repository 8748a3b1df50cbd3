//! Layout caching.
//!
//! - `LayoutCache`: concurrent, grow-only memo of built layouts
//! - `CacheStats`: hit/miss/build counters
//! - `shared` / `layout_for`: the process-wide instance

pub mod shared;
pub mod stats;
pub mod store;

pub use shared::{layout_for, shared};
pub use stats::CacheStats;
pub use store::LayoutCache;

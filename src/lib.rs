//! # card-pips
//!
//! Pip layout engine for playing-card faces.
//!
//! Given how many suit icons ("pips") a card shows, decides where each one
//! goes: two pips stacked in the middle, four in the corners, five with a
//! center pip, and so on, following the conventional card arrangement.
//!
//! ## Design Principles
//!
//! 1. **Pure Layout**: Layouts are plain data in normalized `[0, 1]`
//!    coordinates. Pixel mapping and drawing belong to the renderer.
//!
//! 2. **Total Functions**: Every icon count has a layout. Negative counts
//!    cannot be expressed; signed input is rejected at conversion.
//!
//! 3. **Shared, Concurrent Cache**: Layouts are built once per count and
//!    shared through `Arc`, safely from any number of rendering threads.
//!
//! ## Usage
//!
//! ```
//! use card_pips::{layout_for, IconCount};
//!
//! let layout = layout_for(IconCount::new(5));
//! assert_eq!(layout.columns().as_slice(), &[2, 1, 2]);
//! assert_eq!(layout.positions().len(), 5);
//! ```
//!
//! ## Modules
//!
//! - `core`: Icon counts, errors, cache configuration
//! - `layout`: Column split and normalized pip positions
//! - `cache`: Concurrent memoizing layout cache
//! - `cards`: Ranks, suits, card codes, and what a card face shows

pub mod core;
pub mod layout;
pub mod cache;
pub mod cards;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{CacheConfig, IconCount, LayoutError, Result};

pub use crate::layout::{
    build_layout, compute_column_layout,
    ColumnLayout, LayoutBuilder, NormalizedPosition, PipLayout, StandardLayout,
};

pub use crate::cache::{layout_for, shared, CacheStats, LayoutCache};

pub use crate::cards::{CardMeta, CardMode, CardRank, FaceContent, Suit};

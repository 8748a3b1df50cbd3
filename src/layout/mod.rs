//! Pip layout engine.
//!
//! Two stages, both pure:
//!
//! 1. `compute_column_layout`: split an icon count into columns.
//! 2. `build_layout`: turn the split into normalized pip centers.
//!
//! `LayoutBuilder` is the seam the cache builds through; `StandardLayout`
//! is the conventional arrangement.

pub mod builder;
pub mod matrix;

pub use builder::{build_layout, LayoutBuilder, NormalizedPosition, PipLayout, StandardLayout};
pub use matrix::{compute_column_layout, ColumnLayout, MIDDLE_COLUMN};

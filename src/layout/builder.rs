//! Pip positions in normalized card-face coordinates.
//!
//! Positions are pip centers as fractions of the drawing rectangle:
//! `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right.
//! Mapping them onto pixels is left to the renderer.
//!
//! ## Ordering
//!
//! Positions are column-major: every pip in column 0 top to bottom,
//! then column 1, then column 2. Renderers rely on this order.
//!
//! ## Example
//!
//! ```
//! use card_pips::core::IconCount;
//! use card_pips::layout::build_layout;
//!
//! let five = build_layout(IconCount::new(5));
//! assert_eq!(five.column_count(), 3);
//! assert_eq!(five.max_rows(), 2);
//!
//! // The middle pip sits halfway between the outer pairs.
//! let middle = five.column(1);
//! assert_eq!(middle.len(), 1);
//! assert_eq!((middle[0].x, middle[0].y), (0.5, 0.5));
//! ```

use serde::{Deserialize, Serialize};

use super::matrix::{compute_column_layout, ColumnLayout, MIDDLE_COLUMN};
use crate::core::{IconCount, LayoutError};

/// Center of one pip, relative to a unit drawing rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPosition {
    /// Horizontal fraction, 0 = left edge.
    pub x: f64,
    /// Vertical fraction, 0 = top edge.
    pub y: f64,
}

impl NormalizedPosition {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates lie in `[0, 1]`.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// Complete pip arrangement for one icon count.
///
/// Immutable once built. Cached layouts are shared through `Arc`.
/// Deserialization checks that positions, column count and row count all
/// agree with the column split.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPipLayout")]
pub struct PipLayout {
    columns: ColumnLayout,
    column_count: usize,
    max_rows: u32,
    positions: Vec<NormalizedPosition>,
}

impl PipLayout {
    /// Number of columns (1 or 3).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Pips in the fullest column (0 for an empty face).
    #[must_use]
    pub fn max_rows(&self) -> u32 {
        self.max_rows
    }

    /// All pip centers, column-major.
    #[must_use]
    pub fn positions(&self) -> &[NormalizedPosition] {
        &self.positions
    }

    /// The column split this layout was built from.
    #[must_use]
    pub fn columns(&self) -> &ColumnLayout {
        &self.columns
    }

    /// Number of pips placed.
    #[must_use]
    pub fn icon_count(&self) -> IconCount {
        // positions.len() always fits: it was built from a u32 count.
        IconCount::new(self.positions.len() as u32)
    }

    /// Check whether the face has no pips.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions belonging to column `index`, top to bottom.
    ///
    /// Empty for an empty or nonexistent column.
    #[must_use]
    pub fn column(&self, index: usize) -> &[NormalizedPosition] {
        let Some(rows) = self.columns.get(index) else {
            return &[];
        };
        let start: usize = self.columns.iter().take(index).map(|r| r as usize).sum();
        self.positions
            .get(start..start + rows as usize)
            .unwrap_or(&[])
    }

    /// Iterate over pip centers, column-major.
    pub fn iter(&self) -> impl Iterator<Item = &NormalizedPosition> {
        self.positions.iter()
    }
}

/// Unchecked wire form of `PipLayout`.
#[derive(Deserialize)]
struct RawPipLayout {
    columns: ColumnLayout,
    column_count: usize,
    max_rows: u32,
    positions: Vec<NormalizedPosition>,
}

impl TryFrom<RawPipLayout> for PipLayout {
    type Error = LayoutError;

    fn try_from(raw: RawPipLayout) -> Result<Self, Self::Error> {
        if raw.column_count != raw.columns.column_count() {
            return Err(LayoutError::InvalidLayout(format!(
                "column_count {} but {} columns",
                raw.column_count,
                raw.columns.column_count()
            )));
        }
        if raw.max_rows != raw.columns.max_rows() {
            return Err(LayoutError::InvalidLayout(format!(
                "max_rows {} but fullest column has {}",
                raw.max_rows,
                raw.columns.max_rows()
            )));
        }
        if raw.positions.len() as u64 != raw.columns.total() {
            return Err(LayoutError::InvalidLayout(format!(
                "{} positions for {} pips",
                raw.positions.len(),
                raw.columns.total()
            )));
        }
        if let Some(pip) = raw.positions.iter().find(|p| !p.is_normalized()) {
            return Err(LayoutError::InvalidLayout(format!(
                "position ({}, {}) outside the unit square",
                pip.x, pip.y
            )));
        }

        Ok(Self {
            columns: raw.columns,
            column_count: raw.column_count,
            max_rows: raw.max_rows,
            positions: raw.positions,
        })
    }
}

/// Lay out `icon_count` pips.
///
/// Pure and total. Every denominator is floored at 1, so single-column,
/// single-row and empty layouts never divide by zero.
#[must_use]
pub fn build_layout(icon_count: IconCount) -> PipLayout {
    let columns = compute_column_layout(icon_count);
    let column_count = columns.column_count();
    let max_rows = columns.max_rows();

    let column_span = column_count.saturating_sub(1).max(1) as f64;
    let row_span = f64::from(max_rows.max(1));
    let outer_filled = columns.get(0).is_some_and(|rows| rows > 0);

    let mut positions = Vec::with_capacity(icon_count.as_usize());
    for (c, rows) in columns.iter().enumerate() {
        let x = c as f64 / column_span;
        for r in 0..rows {
            let y = if c == MIDDLE_COLUMN && outer_filled {
                // Middle pips sit one row-unit down so they center between
                // the top and bottom outer pips.
                f64::from(r + 1) / row_span
            } else if rows == 1 {
                0.5
            } else {
                f64::from(r) / f64::from((rows - 1).max(1))
            };
            positions.push(NormalizedPosition::new(x, y));
        }
    }

    PipLayout {
        columns,
        column_count,
        max_rows,
        positions,
    }
}

/// Source of pip layouts for a `LayoutCache`.
///
/// The cache calls `build` while holding a lock on the key's map shard, so a
/// builder must not call back into the cache that owns it; doing so can
/// deadlock.
pub trait LayoutBuilder: Send + Sync {
    /// Build the layout for `icon_count`.
    fn build(&self, icon_count: IconCount) -> PipLayout;
}

/// The conventional playing-card arrangement (`build_layout`).
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardLayout;

impl LayoutBuilder for StandardLayout {
    fn build(&self, icon_count: IconCount) -> PipLayout {
        build_layout(icon_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(layout: &[NormalizedPosition]) -> Vec<(f64, f64)> {
        layout.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_single_pip() {
        let layout = build_layout(IconCount::new(1));
        assert_eq!(layout.column_count(), 1);
        assert_eq!(layout.max_rows(), 1);
        assert_eq!(points(layout.positions()), vec![(0.0, 0.5)]);
    }

    #[test]
    fn test_empty_face() {
        let layout = build_layout(IconCount::ZERO);
        assert!(layout.is_empty());
        assert_eq!(layout.column_count(), 3);
        assert_eq!(layout.max_rows(), 0);
        assert!(layout.column(1).is_empty());
    }

    #[test]
    fn test_two_and_three_use_middle_column() {
        let two = build_layout(IconCount::new(2));
        assert_eq!(points(two.positions()), vec![(0.5, 0.0), (0.5, 1.0)]);

        let three = build_layout(IconCount::new(3));
        assert_eq!(
            points(three.positions()),
            vec![(0.5, 0.0), (0.5, 0.5), (0.5, 1.0)]
        );
    }

    #[test]
    fn test_four_corners() {
        let layout = build_layout(IconCount::new(4));
        assert_eq!(
            points(layout.positions()),
            vec![(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]
        );
    }

    #[test]
    fn test_five_has_centered_middle() {
        let layout = build_layout(IconCount::new(5));
        assert_eq!(
            points(layout.positions()),
            vec![(0.0, 0.0), (0.0, 1.0), (0.5, 0.5), (1.0, 0.0), (1.0, 1.0)]
        );
    }

    #[test]
    fn test_middle_offset_for_eight() {
        // [3, 2, 3]: middle pips at 1/3 and 2/3.
        let layout = build_layout(IconCount::new(8));
        let middle = layout.column(1);
        assert_eq!(middle.len(), 2);
        assert!((middle[0].y - 1.0 / 3.0).abs() < 1e-12);
        assert!((middle[1].y - 2.0 / 3.0).abs() < 1e-12);
        assert!(middle.iter().all(|p| p.x == 0.5));
    }

    #[test]
    fn test_outer_columns_spread_evenly() {
        // [3, 1, 3]
        let layout = build_layout(IconCount::new(7));
        assert_eq!(
            points(layout.column(0)),
            vec![(0.0, 0.0), (0.0, 0.5), (0.0, 1.0)]
        );
        assert_eq!(
            points(layout.column(2)),
            vec![(1.0, 0.0), (1.0, 0.5), (1.0, 1.0)]
        );
    }

    #[test]
    fn test_column_out_of_range() {
        let layout = build_layout(IconCount::new(1));
        assert!(layout.column(1).is_empty());
    }

    #[test]
    fn test_all_positions_normalized() {
        for n in 0..=64 {
            let layout = build_layout(IconCount::new(n));
            assert_eq!(layout.positions().len(), n as usize);
            assert_eq!(layout.icon_count(), IconCount::new(n));
            assert!(
                layout.iter().all(NormalizedPosition::is_normalized),
                "layout for {} leaves the unit square",
                n
            );
        }
    }

    #[test]
    fn test_standard_builder_matches_function() {
        let n = IconCount::new(9);
        assert_eq!(StandardLayout.build(n), build_layout(n));
    }

    #[test]
    fn test_deserialize_rejects_missing_positions() {
        let json = r#"{"columns":[5,0,5],"column_count":3,"max_rows":5,"positions":[]}"#;
        let err = serde_json::from_str::<PipLayout>(json).unwrap_err();
        assert!(err.to_string().contains("0 positions for 10 pips"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_mismatched_counts() {
        let wrong_columns = r#"{"columns":[1],"column_count":3,"max_rows":1,"positions":[{"x":0.0,"y":0.5}]}"#;
        assert!(serde_json::from_str::<PipLayout>(wrong_columns).is_err());

        let wrong_rows = r#"{"columns":[1],"column_count":1,"max_rows":4,"positions":[{"x":0.0,"y":0.5}]}"#;
        assert!(serde_json::from_str::<PipLayout>(wrong_rows).is_err());

        let off_card = r#"{"columns":[1],"column_count":1,"max_rows":1,"positions":[{"x":2.0,"y":0.5}]}"#;
        assert!(serde_json::from_str::<PipLayout>(off_card).is_err());
    }

    #[test]
    fn test_deserialized_layout_columns_are_safe() {
        let json = r#"{"columns":[1],"column_count":1,"max_rows":1,"positions":[{"x":0.0,"y":0.5}]}"#;
        let layout: PipLayout = serde_json::from_str(json).unwrap();
        assert_eq!(layout, build_layout(IconCount::new(1)));
        assert_eq!(layout.column(0).len(), 1);
        assert!(layout.column(2).is_empty());
    }

    #[test]
    fn test_serialization() {
        let layout = build_layout(IconCount::new(6));
        let json = serde_json::to_string(&layout).unwrap();
        let deserialized: PipLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, deserialized);
    }
}

//! Column layout: how many pips go in each column of a card face.
//!
//! Cards use either a single centered column (one pip) or three columns
//! (left, middle, right). The split follows the conventional arrangement
//! printed on standard playing cards:
//!
//! | Count | Columns   |
//! |-------|-----------|
//! | 1     | `[1]`     |
//! | 2     | `[0,2,0]` |
//! | 3     | `[0,3,0]` |
//! | 4     | `[2,0,2]` |
//! | 5     | `[2,1,2]` |
//! | 6     | `[3,0,3]` |
//! | 7     | `[3,1,3]` |
//! | 8     | `[3,2,3]` |
//! | 9     | `[4,1,4]` |
//! | 10    | `[4,2,4]` |

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::IconCount;

/// Index of the middle column in a three-column layout.
pub const MIDDLE_COLUMN: usize = 1;

/// Per-column pip counts, left to right.
///
/// Always one column (a lone pip) or three. Stored inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnLayout(SmallVec<[u32; 3]>);

impl ColumnLayout {
    /// A single centered column.
    #[must_use]
    pub fn single(rows: u32) -> Self {
        Self(smallvec![rows])
    }

    /// Left, middle, right columns; the outer two always match.
    #[must_use]
    pub fn three(side: u32, middle: u32) -> Self {
        Self(smallvec![side, middle, side])
    }

    /// Column counts as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Number of columns (1 or 3).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.0.len()
    }

    /// Pips in column `index`, if that column exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    /// Largest column.
    #[must_use]
    pub fn max_rows(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Total pips across all columns.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&rows| u64::from(rows)).sum()
    }

    /// Iterate over column counts, left to right.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

/// Split `icon_count` pips into columns.
///
/// Total over every count: 0 yields `[0,0,0]`, which draws nothing.
#[must_use]
pub fn compute_column_layout(icon_count: IconCount) -> ColumnLayout {
    let n = icon_count.raw();

    if n == 1 {
        return ColumnLayout::single(1);
    }
    if n < 4 {
        return ColumnLayout::three(0, n);
    }

    if n > 6 || n % 2 == 1 {
        // Odd or large: favour the outside columns, then even up.
        let mut side = n / 3;
        let mut remain = (n - 2 * side) % n;
        if remain >= side && remain > 1 {
            remain -= 2;
            side += 1;
        }
        ColumnLayout::three(side, remain)
    } else {
        let side = n / 2;
        let remain = (n - 2 * side) % n;
        ColumnLayout::three(side, remain)
    }
}

//! Icon count: how many identical pips go on one card face.
//!
//! Counts are unsigned, so a negative count cannot be constructed.
//! Signed inputs go through `TryFrom`, which rejects negatives:
//!
//! ```
//! use card_pips::core::{IconCount, LayoutError};
//!
//! assert_eq!(IconCount::try_from(7i64).unwrap(), IconCount::new(7));
//! assert!(matches!(
//!     IconCount::try_from(-1i64),
//!     Err(LayoutError::NegativeIconCount(-1))
//! ));
//! ```

use serde::{Deserialize, Serialize};

use super::error::LayoutError;

/// Number of icons to place on a card face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IconCount(pub u32);

impl IconCount {
    /// An empty card face.
    pub const ZERO: Self = Self(0);

    /// Create a new icon count.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    /// Get the raw count.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the count as a `usize` (for sizing position buffers).
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Check whether nothing is drawn.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for IconCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for IconCount {
    fn from(count: u32) -> Self {
        Self(count)
    }
}

impl From<u8> for IconCount {
    fn from(count: u8) -> Self {
        Self(u32::from(count))
    }
}

impl TryFrom<i64> for IconCount {
    type Error = LayoutError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        if count < 0 {
            return Err(LayoutError::NegativeIconCount(count));
        }
        u32::try_from(count)
            .map(Self)
            .map_err(|_| LayoutError::IconCountOverflow(count))
    }
}

impl TryFrom<i32> for IconCount {
    type Error = LayoutError;

    fn try_from(count: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(count))
    }
}

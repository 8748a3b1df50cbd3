//! Card ranks.
//!
//! Ranks are plain numbers (1 = ace, 11-13 = court cards). Games may use
//! ranks past 13; they still get a pip count or a large image.

use serde::{Deserialize, Serialize};

use crate::core::{LayoutError, Result};

/// Numeric card rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardRank(pub u8);

impl CardRank {
    /// Ace (1).
    pub const ACE: Self = Self(1);
    /// Ten (10).
    pub const TEN: Self = Self(10);
    /// Jack (11).
    pub const JACK: Self = Self(11);
    /// Queen (12).
    pub const QUEEN: Self = Self(12);
    /// King (13).
    pub const KING: Self = Self(13);

    /// Create a new rank.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Jack and above.
    #[must_use]
    pub const fn is_court(self) -> bool {
        self.0 > Self::TEN.0
    }

    /// Parse a shorthand rank character.
    ///
    /// Accepts `2`-`9`, `T` (ten), `J`, `Q`, `K`, `A`, case-insensitive.
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Self::ACE),
            'T' => Ok(Self::TEN),
            'J' => Ok(Self::JACK),
            'Q' => Ok(Self::QUEEN),
            'K' => Ok(Self::KING),
            d @ '2'..='9' => Ok(Self(d as u8 - b'0')),
            _ => Err(LayoutError::UnknownRank(c)),
        }
    }
}

impl std::fmt::Display for CardRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::ACE => write!(f, "A"),
            Self::JACK => write!(f, "J"),
            Self::QUEEN => write!(f, "Q"),
            Self::KING => write!(f, "K"),
            Self(v) => write!(f, "{}", v),
        }
    }
}

impl From<u8> for CardRank {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

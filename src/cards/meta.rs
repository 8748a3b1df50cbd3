//! Card identity: rank plus suit.
//!
//! ## Shorthand codes
//!
//! A card can be written as two characters, rank then suit:
//!
//! ```
//! use card_pips::cards::{CardMeta, CardRank, Suit};
//!
//! let queen: CardMeta = "QH".parse().unwrap();
//! assert_eq!(queen.rank, CardRank::QUEEN);
//! assert_eq!(queen.suit, Suit::heart());
//!
//! let seven: CardMeta = "7S".parse().unwrap();
//! assert_eq!(seven.pip_layout().unwrap().positions().len(), 7);
//! ```

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::face::FaceContent;
use super::rank::CardRank;
use super::suit::Suit;
use crate::cache::layout_for;
use crate::core::LayoutError;
use crate::layout::PipLayout;

/// A card's rank and suit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardMeta {
    /// Rank (1 = ace).
    pub rank: CardRank,
    /// Suit symbol.
    pub suit: Suit,
}

impl CardMeta {
    /// Create a new card.
    pub fn new(rank: impl Into<CardRank>, suit: impl Into<Suit>) -> Self {
        Self {
            rank: rank.into(),
            suit: suit.into(),
        }
    }

    /// What the center of this card shows when face up.
    #[must_use]
    pub fn face(&self) -> FaceContent {
        FaceContent::for_rank(self.rank)
    }

    /// Pip layout from the shared cache, or `None` for aces and court cards.
    #[must_use]
    pub fn pip_layout(&self) -> Option<Arc<PipLayout>> {
        self.face().pip_count().map(layout_for)
    }
}

impl FromStr for CardMeta {
    type Err = LayoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let mut chars = code.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => Ok(Self {
                rank: CardRank::from_char(rank)?,
                suit: Suit::from_letter(suit),
            }),
            _ => Err(LayoutError::InvalidCardCode(code.to_string())),
        }
    }
}

impl std::fmt::Display for CardMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

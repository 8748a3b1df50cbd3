//! What a card slot shows.
//!
//! A slot is empty, shows a card back, or shows a face. Faces of ranks
//! 2-10 draw one pip per rank; aces and court cards draw a single large
//! image instead.

use serde::{Deserialize, Serialize};

use super::meta::CardMeta;
use super::rank::CardRank;
use crate::core::IconCount;

/// How a card slot is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardMode {
    /// No card in the slot; only its outline is drawn.
    EmptySlot,
    /// A face-down card.
    UnknownCard,
    /// A face-up card.
    Card,
}

impl CardMode {
    /// Pick the mode for an optional card.
    #[must_use]
    pub fn resolve(meta: Option<&CardMeta>, face_up: bool) -> Self {
        match meta {
            None => CardMode::EmptySlot,
            Some(_) if !face_up => CardMode::UnknownCard,
            Some(_) => CardMode::Card,
        }
    }

    /// Anything but an empty slot.
    #[must_use]
    pub fn is_solid(self) -> bool {
        self != CardMode::EmptySlot
    }
}

/// Center of a face-up card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceContent {
    /// One pip per rank, arranged by the layout engine.
    Pips(IconCount),
    /// A single large image (aces and court cards).
    LargeImage,
}

impl FaceContent {
    /// Face content for `rank`.
    #[must_use]
    pub fn for_rank(rank: CardRank) -> Self {
        if rank == CardRank::ACE || rank.is_court() {
            FaceContent::LargeImage
        } else {
            FaceContent::Pips(IconCount::from(rank.raw()))
        }
    }

    /// Pip count, if this face draws pips.
    #[must_use]
    pub fn pip_count(self) -> Option<IconCount> {
        match self {
            FaceContent::Pips(count) => Some(count),
            FaceContent::LargeImage => None,
        }
    }
}

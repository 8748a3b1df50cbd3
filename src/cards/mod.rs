//! Card helpers for callers of the layout engine.
//!
//! ## Key Types
//!
//! - `CardRank`: numeric rank with ace and court constants
//! - `Suit`: pip symbol name
//! - `CardMeta`: rank plus suit, parseable from codes like `"QH"`
//! - `CardMode`: empty slot, face down, or face up
//! - `FaceContent`: pips or a single large image, decided by rank

pub mod face;
pub mod meta;
pub mod rank;
pub mod suit;

pub use face::{CardMode, FaceContent};
pub use meta::CardMeta;
pub use rank::CardRank;
pub use suit::Suit;

//! Suits.
//!
//! A suit is the name of the symbol drawn as a pip. The four standard
//! suits have fixed names; anything else (stars, moons, ...) is allowed.

use serde::{Deserialize, Serialize};

/// Symbol name of a card's suit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suit(pub String);

impl Suit {
    /// Hearts symbol name.
    pub const HEART: &'static str = "heart";
    /// Spades symbol name.
    pub const SPADE: &'static str = "spade";
    /// Clubs symbol name.
    pub const CLUB: &'static str = "club";
    /// Diamonds symbol name.
    pub const DIAMOND: &'static str = "diamond";

    /// Create a suit from any symbol name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Hearts.
    #[must_use]
    pub fn heart() -> Self {
        Self::new(Self::HEART)
    }

    /// Spades.
    #[must_use]
    pub fn spade() -> Self {
        Self::new(Self::SPADE)
    }

    /// Clubs.
    #[must_use]
    pub fn club() -> Self {
        Self::new(Self::CLUB)
    }

    /// Diamonds.
    #[must_use]
    pub fn diamond() -> Self {
        Self::new(Self::DIAMOND)
    }

    /// The four standard suits.
    #[must_use]
    pub fn standard() -> [Self; 4] {
        [Self::heart(), Self::spade(), Self::club(), Self::diamond()]
    }

    /// Suit for a shorthand letter: `H`, `S`, `C`, `D` map to the standard
    /// suits, any other character is kept as the symbol name.
    #[must_use]
    pub fn from_letter(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'H' => Self::heart(),
            'S' => Self::spade(),
            'C' => Self::club(),
            'D' => Self::diamond(),
            _ => Self(c.to_string()),
        }
    }

    /// The symbol name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// One of hearts, spades, clubs, diamonds.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        matches!(
            self.0.as_str(),
            Self::HEART | Self::SPADE | Self::CLUB | Self::DIAMOND
        )
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Suit {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

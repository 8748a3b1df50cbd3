//! Crate error type.
//!
//! Layout computation itself is total; errors only come from converting
//! untrusted input (signed counts, card shorthand codes) into typed values.

/// Errors produced while converting input into layout or card types.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A signed icon count was negative.
    #[error("icon count must be non-negative, got {0}")]
    NegativeIconCount(i64),

    /// A signed icon count does not fit in 32 bits.
    #[error("icon count {0} is too large")]
    IconCountOverflow(i64),

    /// A deserialized layout does not agree with its own column split.
    #[error("invalid pip layout: {0}")]
    InvalidLayout(String),

    /// A rank character is not one of `2`-`9`, `T`, `J`, `Q`, `K`, `A`.
    #[error("unknown card rank {0:?}")]
    UnknownRank(char),

    /// A card shorthand code was not exactly two characters.
    #[error("card code must be 2 characters (rank then suit), got {0:?}")]
    InvalidCardCode(String),
}

/// Result alias for fallible conversions in this crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LayoutError::NegativeIconCount(-3).to_string(),
            "icon count must be non-negative, got -3"
        );
        assert_eq!(
            LayoutError::UnknownRank('X').to_string(),
            "unknown card rank 'X'"
        );
        assert_eq!(
            LayoutError::InvalidCardCode("QHX".into()).to_string(),
            "card code must be 2 characters (rank then suit), got \"QHX\""
        );
        assert_eq!(
            LayoutError::InvalidLayout("3 positions for 5 pips".into()).to_string(),
            "invalid pip layout: 3 positions for 5 pips"
        );
    }
}

//! Error types for card conversions and parsing.

use thiserror::Error;

/// Errors that can occur when converting or parsing cards.
///
/// Building and transforming decks never fails; these only come from
/// turning raw ordinals or labels back into card values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Ordinal does not name a suit.
    #[error("invalid suit ordinal {0}")]
    InvalidSuit(u8),
    /// Label does not name a suit.
    #[error("unknown suit label")]
    UnknownSuit,
    /// Label does not name a standard rank.
    #[error("unknown rank label")]
    UnknownRank,
    /// Card label is neither `Joker` nor `<rank> of <suit>s`.
    #[error("malformed card label")]
    Malformed,
}

//! Card types and their labels.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
///
/// The discriminants are stable ordinals and feed the ranking keys in
/// [`crate::order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spade = 0,
    /// Diamonds.
    Diamond = 1,
    /// Clubs.
    Club = 2,
    /// Hearts.
    Heart = 3,
    /// Marks joker cards. Never part of a standard deck.
    Joker = 4,
}

/// Number of real suits.
pub const NUM_SUITS: usize = 4;

/// Number of cards per standard deck.
pub const DECK_SIZE: usize = 52;

impl Suit {
    /// The real suits in generation order. Does not contain [`Suit::Joker`].
    pub const ALL: [Self; NUM_SUITS] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Returns the stable ordinal of the suit.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns whether this is the joker sentinel.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::Joker)
    }

    /// Returns the label of the suit.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(Self::Spade),
            1 => Ok(Self::Diamond),
            2 => Ok(Self::Club),
            3 => Ok(Self::Heart),
            4 => Ok(Self::Joker),
            _ => Err(CardError::InvalidSuit(ordinal)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .chain([Self::Joker])
            .find(|suit| suit.label() == s)
            .ok_or(CardError::UnknownSuit)
    }
}

/// Card rank.
///
/// Standard ranks run from [`Rank::ACE`] (1) to [`Rank::KING`] (13); 0 is
/// reserved. Joker cards reuse the rank as a plain disambiguator, so any
/// `u8` is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rank(u8);

impl Rank {
    /// Ace.
    pub const ACE: Self = Self(1);
    /// Two.
    pub const TWO: Self = Self(2);
    /// Three.
    pub const THREE: Self = Self(3);
    /// Four.
    pub const FOUR: Self = Self(4);
    /// Five.
    pub const FIVE: Self = Self(5);
    /// Six.
    pub const SIX: Self = Self(6);
    /// Seven.
    pub const SEVEN: Self = Self(7);
    /// Eight.
    pub const EIGHT: Self = Self(8);
    /// Nine.
    pub const NINE: Self = Self(9);
    /// Ten.
    pub const TEN: Self = Self(10);
    /// Jack.
    pub const JACK: Self = Self(11);
    /// Queen.
    pub const QUEEN: Self = Self(12);
    /// King.
    pub const KING: Self = Self(13);

    /// Lowest standard rank.
    pub const MIN: Self = Self::ACE;
    /// Highest standard rank.
    pub const MAX: Self = Self::KING;

    /// The standard ranks, ascending.
    pub const ALL: [Self; 13] = [
        Self::ACE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
        Self::SIX,
        Self::SEVEN,
        Self::EIGHT,
        Self::NINE,
        Self::TEN,
        Self::JACK,
        Self::QUEEN,
        Self::KING,
    ];

    const LABELS: [&'static str; 13] = [
        "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
        "Queen", "King",
    ];

    /// Creates a rank from its ordinal.
    ///
    /// Note: This function does not validate the ordinal. Values outside
    /// 1..=13 are only meaningful as joker disambiguators.
    #[must_use]
    pub const fn new(ordinal: u8) -> Self {
        Self(ordinal)
    }

    /// Returns the ordinal of the rank.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns whether the rank is one of Ace through King.
    #[must_use]
    pub const fn is_standard(self) -> bool {
        self.0 >= Self::MIN.0 && self.0 <= Self::MAX.0
    }

    /// Returns the label of a standard rank.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        if self.is_standard() {
            Some(Self::LABELS[(self.0 - 1) as usize])
        } else {
            None
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "Rank({})", self.0),
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label() == Some(s))
            .ok_or(CardError::UnknownRank)
    }
}

/// A playing card.
///
/// The derived ordering compares suit first, then rank, which matches the
/// suit-major order for real cards and puts jokers after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card. For jokers this only tells them apart.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a joker carrying the given disambiguator.
    #[must_use]
    pub const fn joker(index: u8) -> Self {
        Self {
            suit: Suit::Joker,
            rank: Rank(index),
        }
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.suit.is_joker()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return write!(f, "{}", self.suit);
        }

        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

/// Parses the labels produced by [`Display`](fmt::Display).
///
/// `"Joker"` parses to `Card::joker(0)` since the label drops the
/// disambiguator.
///
/// ```
/// use deckrs::{Card, Rank, Suit};
///
/// let card: Card = "Queen of Diamonds".parse().unwrap();
/// assert_eq!(card, Card::new(Suit::Diamond, Rank::QUEEN));
/// ```
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Suit::Joker.label() {
            return Ok(Self::joker(0));
        }

        let (rank, suit) = s.split_once(" of ").ok_or(CardError::Malformed)?;
        let suit: Suit = suit
            .strip_suffix('s')
            .ok_or(CardError::Malformed)?
            .parse()?;
        if suit.is_joker() {
            return Err(CardError::Malformed);
        }

        Ok(Self::new(suit, rank.parse()?))
    }
}

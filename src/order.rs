//! Ranking keys and positional comparators.

extern crate alloc;

use alloc::boxed::Box;

use crate::card::{Card, NUM_SUITS, Rank};

/// First key handed to jokers. Every real card keys below it under both orders.
const JOKER_BASE: u16 = (NUM_SUITS as u16) * (Rank::MAX.get() as u16) + 1;

/// Positional less-than predicate over a deck snapshot.
pub type Less<'c> = Box<dyn Fn(usize, usize) -> bool + 'c>;

/// Builds a [`Less`] predicate from a deck snapshot.
pub type ComparatorFactory = for<'c> fn(&'c [Card]) -> Less<'c>;

/// Key ordering cards by suit, then by rank within the suit.
///
/// Jokers key after every real card, ordered by their disambiguator.
#[must_use]
pub const fn suit_major_key(card: Card) -> u16 {
    if card.is_joker() {
        return JOKER_BASE + card.rank.get() as u16;
    }

    card.suit.ordinal() as u16 * Rank::MAX.get() as u16 + card.rank.get() as u16
}

/// Key ordering cards by rank, then by suit among equal ranks.
///
/// Jokers key after every real card, ordered by their disambiguator.
#[must_use]
pub const fn rank_major_key(card: Card) -> u16 {
    if card.is_joker() {
        return JOKER_BASE + card.rank.get() as u16;
    }

    card.rank.get().saturating_sub(1) as u16 * NUM_SUITS as u16 + card.suit.ordinal() as u16
}

/// Compares the cards at two positions by suit, then by rank.
///
/// # Panics
///
/// The returned predicate panics if a position is out of bounds.
#[must_use]
pub fn by_suit_then_rank(cards: &[Card]) -> Less<'_> {
    Box::new(move |i: usize, j: usize| suit_major_key(cards[i]) < suit_major_key(cards[j]))
}

/// Compares the cards at two positions by rank, then by suit.
///
/// # Panics
///
/// The returned predicate panics if a position is out of bounds.
#[must_use]
pub fn by_rank_then_suit(cards: &[Card]) -> Less<'_> {
    Box::new(move |i: usize, j: usize| rank_major_key(cards[i]) < rank_major_key(cards[j]))
}

/// Built-in card orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Order {
    /// All spades, then diamonds, clubs and hearts; ranks ascending within a suit.
    #[default]
    SuitThenRank,
    /// All aces, then all twos and so on; suits in declared order within a rank.
    RankThenSuit,
}

impl Order {
    /// Returns the comparator factory for this order.
    #[must_use]
    pub const fn comparator(self) -> ComparatorFactory {
        match self {
            Self::SuitThenRank => by_suit_then_rank,
            Self::RankThenSuit => by_rank_then_suit,
        }
    }

    /// Returns the ranking key of a card under this order.
    #[must_use]
    pub const fn key(self, card: Card) -> u16 {
        match self {
            Self::SuitThenRank => suit_major_key(card),
            Self::RankThenSuit => rank_major_key(card),
        }
    }
}

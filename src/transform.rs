//! Deck transformations.
//!
//! A transformation consumes a deck and returns the next one. The free
//! functions here either are transformations themselves ([`default_sort`],
//! [`shuffle`]) or build one from their arguments.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::order::{Less, by_suit_then_rank};

/// A single deck-building step.
///
/// Implemented by every `FnMut(Vec<Card>) -> Vec<Card>` closure and by the
/// named [`Step`](crate::Step) variants.
pub trait Transform {
    /// Consumes a deck and returns the transformed deck.
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> Transform for F
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

/// Reorders `cards` with a positional comparator built from a snapshot of them.
///
/// Positions are sorted instead of the cards, so the snapshot the comparator
/// borrows stays valid for the whole sort.
pub(crate) fn sort_positions<F>(cards: Vec<Card>, factory: F) -> Vec<Card>
where
    F: for<'c> Fn(&'c [Card]) -> Less<'c>,
{
    let mut positions: Vec<usize> = (0..cards.len()).collect();
    let less = factory(&cards);
    positions.sort_unstable_by(|&i, &j| {
        if less(i, j) {
            Ordering::Less
        } else if less(j, i) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });

    positions.into_iter().map(|i| cards[i]).collect()
}

/// Builds a transformation that sorts the deck with the given comparator factory.
///
/// The factory receives the deck and returns a less-than predicate over
/// positions in it. The sort is not stable.
///
/// # Panics
///
/// The returned transformation may panic if the predicate is not a strict
/// weak order.
///
/// ```
/// use deckrs::{Rank, by_rank_then_suit, sort};
///
/// let cards = deckrs::new([sort(by_rank_then_suit)]);
/// assert!(cards[..4].iter().all(|card| card.rank == Rank::ACE));
/// ```
#[must_use]
pub fn sort<F>(less: F) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    F: for<'c> Fn(&'c [Card]) -> Less<'c>,
{
    move |cards: Vec<Card>| sort_positions(cards, &less)
}

/// Sorts the deck by suit, then by rank.
#[must_use]
pub fn default_sort(cards: Vec<Card>) -> Vec<Card> {
    sort_positions(cards, by_suit_then_rank)
}

/// Shuffles the deck with a generator seeded from the current time.
///
/// Every call draws a fresh seed, so results are not reproducible. Use
/// [`shuffle_with`] to control the randomness.
#[cfg(feature = "std")]
#[must_use]
pub fn shuffle(cards: Vec<Card>) -> Vec<Card> {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(clock_seed());
    shuffle_with(&mut rng)(cards)
}

/// Returns a seed derived from the wall clock.
#[cfg(feature = "std")]
pub(crate) fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    tracing::event!(tracing::Level::DEBUG, seed, "Drew shuffle seed from clock");
    seed
}

/// Builds a transformation that shuffles the deck with `rng`.
///
/// ```
/// use deckrs::shuffle_with;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut first = ChaCha8Rng::seed_from_u64(9);
/// let mut second = ChaCha8Rng::seed_from_u64(9);
/// assert_eq!(
///     deckrs::new([shuffle_with(&mut first)]),
///     deckrs::new([shuffle_with(&mut second)]),
/// );
/// ```
#[must_use]
pub fn shuffle_with<R>(rng: &mut R) -> impl FnMut(Vec<Card>) -> Vec<Card> + '_
where
    R: Rng + ?Sized,
{
    move |mut cards: Vec<Card>| {
        cards.shuffle(rng);
        cards
    }
}

/// Builds a transformation that appends `n` jokers.
///
/// The jokers carry the disambiguators `0..n`.
#[must_use]
pub fn jokers(n: u8) -> impl Fn(Vec<Card>) -> Vec<Card> {
    move |mut cards: Vec<Card>| {
        cards.extend((0..n).map(Card::joker));
        cards
    }
}

/// Builds a transformation that drops every card for which `excluded` returns true.
///
/// Kept cards stay in their relative order.
///
/// ```
/// use deckrs::{Suit, filter};
///
/// let cards = deckrs::new([filter(|card| card.suit == Suit::Heart)]);
/// assert_eq!(cards.len(), 39);
/// ```
#[must_use]
pub fn filter<F>(excluded: F) -> impl Fn(Vec<Card>) -> Vec<Card>
where
    F: Fn(&Card) -> bool,
{
    move |mut cards: Vec<Card>| {
        cards.retain(|card| !excluded(card));
        cards
    }
}

/// Builds a transformation that concatenates `n` copies of the deck.
///
/// `decks(0)` empties the deck.
///
/// # Panics
///
/// The returned transformation panics if the combined length overflows.
#[must_use]
pub fn decks(n: usize) -> impl Fn(Vec<Card>) -> Vec<Card> {
    move |cards: Vec<Card>| cards.repeat(n)
}

//! Named deck-building steps and the pipeline builder.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck;
use crate::order::Order;
use crate::transform::{Transform, decks, filter, jokers, shuffle_with, sort};

/// Randomness source for a shuffle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Seed {
    /// Seed drawn from the wall clock each time the step is applied.
    #[cfg(feature = "std")]
    Clock,
    /// Fixed seed. The same seed always produces the same permutation.
    Fixed(u64),
}

impl Seed {
    fn rng(self) -> ChaCha8Rng {
        match self {
            #[cfg(feature = "std")]
            Self::Clock => ChaCha8Rng::seed_from_u64(crate::transform::clock_seed()),
            Self::Fixed(seed) => ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

/// A named deck-building step.
///
/// Unlike a closure, a step can be matched on, copied and printed, which
/// makes a requested pipeline easy to log or assert on.
#[derive(Clone, Copy)]
pub enum Step {
    /// Sort with a built-in order.
    Sort(Order),
    /// Append jokers with disambiguators `0..n`.
    Jokers(u8),
    /// Drop every card the predicate matches.
    FilterOut(fn(&Card) -> bool),
    /// Concatenate `n` copies of the deck.
    Repeat(usize),
    /// Shuffle with the given randomness source.
    Shuffle(Seed),
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sort(order) => f.debug_tuple("Sort").field(order).finish(),
            Self::Jokers(n) => f.debug_tuple("Jokers").field(n).finish(),
            Self::FilterOut(_) => f.write_str("FilterOut(..)"),
            Self::Repeat(n) => f.debug_tuple("Repeat").field(n).finish(),
            Self::Shuffle(seed) => f.debug_tuple("Shuffle").field(seed).finish(),
        }
    }
}

impl Transform for Step {
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        match *self {
            Self::Sort(order) => sort(order.comparator())(cards),
            Self::Jokers(n) => jokers(n)(cards),
            Self::FilterOut(excluded) => filter(excluded)(cards),
            Self::Repeat(n) => decks(n)(cards),
            Self::Shuffle(seed) => shuffle_with(&mut seed.rng())(cards),
        }
    }
}

/// Builder for a sequence of deck-building steps.
///
/// Steps run in the order they were added, starting from the standard deck:
///
/// ```
/// use deckrs::{Order, Pipeline, Seed};
///
/// let cards = Pipeline::new()
///     .with_decks(2)
///     .with_jokers(4)
///     .with_sort(Order::RankThenSuit)
///     .with_shuffle(Seed::Fixed(7))
///     .build();
/// assert_eq!(cards.len(), 108);
/// ```
#[derive(Default)]
pub struct Pipeline<'a> {
    stages: Vec<Box<dyn Transform + 'a>>,
}

impl<'a> Pipeline<'a> {
    /// Creates an empty pipeline.
    #[must_use]
    pub const fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends any transformation, including caller-defined closures.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Pipeline, Rank};
    ///
    /// let cards = Pipeline::new()
    ///     .with(|mut cards: Vec<deckrs::Card>| {
    ///         cards.retain(|card| card.rank >= Rank::TEN);
    ///         cards
    ///     })
    ///     .build();
    /// assert_eq!(cards.len(), 16);
    /// ```
    #[must_use]
    pub fn with(mut self, step: impl Transform + 'a) -> Self {
        self.stages.push(Box::new(step));
        self
    }

    /// Appends a named step.
    #[must_use]
    pub fn with_step(self, step: Step) -> Self {
        self.with(step)
    }

    /// Sorts with a built-in order.
    #[must_use]
    pub fn with_sort(self, order: Order) -> Self {
        self.with_step(Step::Sort(order))
    }

    /// Appends `n` jokers.
    #[must_use]
    pub fn with_jokers(self, n: u8) -> Self {
        self.with_step(Step::Jokers(n))
    }

    /// Drops every card for which `excluded` returns true.
    #[must_use]
    pub fn with_filter(self, excluded: impl Fn(&Card) -> bool + 'a) -> Self {
        self.with(filter(excluded))
    }

    /// Repeats the deck `n` times.
    #[must_use]
    pub fn with_decks(self, n: usize) -> Self {
        self.with_step(Step::Repeat(n))
    }

    /// Shuffles with the given randomness source.
    #[must_use]
    pub fn with_shuffle(self, seed: Seed) -> Self {
        self.with_step(Step::Shuffle(seed))
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns whether the pipeline has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs every step over a fresh standard deck.
    #[must_use]
    pub fn build(self) -> Vec<Card> {
        deck::build(self.stages, |stage, cards| (**stage).apply(cards))
    }
}

impl fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

//! Standard deck generation and the step fold.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::transform::Transform;

/// Returns the 52 standard cards in generation order.
///
/// Suits follow [`Suit::ALL`] and ranks ascend from Ace to King within each
/// suit. No jokers are included.
#[must_use]
pub fn standard() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Builds a deck by applying `steps` in order to the standard deck.
///
/// Each step receives the previous step's output. Without steps the result
/// is [`standard`], unsorted beyond its generation order.
///
/// # Example
///
/// ```
/// use deckrs::{Suit, Step};
///
/// let cards = deckrs::new([Step::Jokers(3)]);
/// assert_eq!(cards.len(), 55);
/// assert_eq!(cards.iter().filter(|card| card.suit == Suit::Joker).count(), 3);
/// ```
#[must_use]
pub fn new<T>(steps: impl IntoIterator<Item = T>) -> Vec<Card>
where
    T: Transform,
{
    build(steps, |step, cards| step.apply(cards))
}

pub(crate) fn build<T>(
    steps: impl IntoIterator<Item = T>,
    mut apply: impl FnMut(&mut T, Vec<Card>) -> Vec<Card>,
) -> Vec<Card> {
    let mut cards = standard();
    let mut applied = 0_usize;

    for mut step in steps {
        cards = apply(&mut step, cards);
        tracing::event!(
            tracing::Level::TRACE,
            step = applied,
            cards = cards.len(),
            "Applied deck step"
        );
        applied += 1;
    }

    tracing::event!(
        tracing::Level::DEBUG,
        steps = applied,
        cards = cards.len(),
        "Built deck"
    );
    cards
}

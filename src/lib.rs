//! A playing-card deck with composable building steps and optional `no_std` support.
//!
//! The crate generates the canonical 52-card deck and folds a list of
//! [`Transform`] steps over it: sorting, shuffling, adding jokers, filtering
//! cards out, and repeating the deck for multi-deck games.
//!
//! # Example
//!
//! ```
//! use deckrs::{Order, Seed, Step, Suit};
//!
//! let cards = deckrs::new([
//!     Step::Jokers(2),
//!     Step::FilterOut(|card| card.suit == Suit::Heart),
//!     Step::Sort(Order::RankThenSuit),
//!     Step::Shuffle(Seed::Fixed(42)),
//! ]);
//! assert_eq!(cards.len(), 41);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod order;
pub mod transform;

// Re-export main types
pub use card::{Card, DECK_SIZE, NUM_SUITS, Rank, Suit};
pub use deck::{new, standard};
pub use error::CardError;
pub use options::{Pipeline, Seed, Step};
pub use order::{
    ComparatorFactory, Less, Order, by_rank_then_suit, by_suit_then_rank, rank_major_key,
    suit_major_key,
};
#[cfg(feature = "std")]
pub use transform::shuffle;
pub use transform::{Transform, decks, default_sort, filter, jokers, shuffle_with, sort};

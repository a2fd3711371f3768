//! Prints a few deck variants.
//!
//! Pass a number to fix the shuffle seed: `cargo run --example build_deck -- 42`.

use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, Order, Pipeline, Rank, Seed, Suit};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    println!("Shuffle seed: {seed}");

    let standard = deckrs::standard();
    print_deck("Standard deck", &standard);

    let euchre = Pipeline::new()
        .with_filter(|card| card.rank > Rank::ACE && card.rank < Rank::NINE)
        .with_sort(Order::RankThenSuit)
        .build();
    print_deck("Euchre deck by rank", &euchre);

    let canasta = Pipeline::new()
        .with_decks(2)
        .with_jokers(4)
        .with_shuffle(Seed::Fixed(seed))
        .build();
    println!(
        "Canasta shoe: {} cards, {} jokers, top card {}",
        canasta.len(),
        canasta.iter().filter(|card| card.is_joker()).count(),
        canasta
            .first()
            .map_or_else(|| String::from("none"), ToString::to_string)
    );

    let hearts_hand: Vec<Card> = Pipeline::new()
        .with_shuffle(Seed::Fixed(seed))
        .build()
        .into_iter()
        .take(13)
        .collect();
    let mut hearts_hand = deckrs::default_sort(hearts_hand);
    hearts_hand.retain(|card| card.suit == Suit::Heart);
    print_deck("Hearts in a 13-card hand", &hearts_hand);
}

fn print_deck(title: &str, cards: &[Card]) {
    println!("{title} ({} cards):", cards.len());
    for card in cards {
        println!("  {card}");
    }
}

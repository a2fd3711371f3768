//! Deck building integration tests.

use std::collections::{HashMap, HashSet};

use deckrs::{
    Card, DECK_SIZE, Less, Order, Pipeline, Rank, Seed, Step, Suit, by_rank_then_suit,
    by_suit_then_rank, decks, default_sort, filter, jokers, shuffle_with, sort,
    suit_major_key,
};
#[cfg(feature = "std")]
use deckrs::shuffle;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for &card in cards {
        *counts.entry(card).or_insert(0) += 1;
    }
    counts
}

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort();
    cards
}

fn by_descending_rank(cards: &[Card]) -> Less<'_> {
    Box::new(move |i: usize, j: usize| cards[i].rank > cards[j].rank)
}

#[test]
fn standard_deck_has_every_card_once() {
    let cards = deckrs::standard();
    assert_eq!(cards.len(), DECK_SIZE);

    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(cards.iter().all(|card| !card.is_joker()));

    for suit in Suit::ALL {
        assert_eq!(cards.iter().filter(|card| card.suit == suit).count(), 13);
    }
    for rank in Rank::ALL {
        assert_eq!(cards.iter().filter(|card| card.rank == rank).count(), 4);
    }
}

#[test]
fn new_without_steps_keeps_generation_order() {
    let steps: [Step; 0] = [];
    let cards = deckrs::new(steps);

    assert_eq!(cards, deckrs::standard());
    assert_eq!(cards[0], Card::new(Suit::Spade, Rank::ACE));
    assert_eq!(cards[12], Card::new(Suit::Spade, Rank::KING));
    assert_eq!(cards[13], Card::new(Suit::Diamond, Rank::ACE));
    assert_eq!(cards[51], Card::new(Suit::Heart, Rank::KING));
}

#[test_log::test]
fn default_sort_orders_by_suit_then_rank() {
    let cards = deckrs::new([Step::Shuffle(Seed::Fixed(11))]);
    assert_ne!(cards, deckrs::standard());

    let cards = default_sort(cards);
    assert!(
        cards
            .windows(2)
            .all(|pair| suit_major_key(pair[0]) < suit_major_key(pair[1]))
    );
    assert_eq!(cards, deckrs::standard());

    let again = default_sort(cards.clone());
    assert_eq!(again, cards);
}

#[test]
fn sort_by_rank_groups_ranks() {
    let cards = deckrs::new([sort(by_rank_then_suit)]);
    assert_eq!(cards.len(), DECK_SIZE);

    for (group, rank) in cards.chunks(4).zip(Rank::ALL) {
        assert!(group.iter().all(|card| card.rank == rank));
        let suits: Vec<Suit> = group.iter().map(|card| card.suit).collect();
        assert_eq!(suits, Suit::ALL);
    }
}

#[test]
fn sort_accepts_custom_comparators() {
    let cards = deckrs::new([sort(by_descending_rank)]);

    assert!(cards[..4].iter().all(|card| card.rank == Rank::KING));
    assert!(cards[48..].iter().all(|card| card.rank == Rank::ACE));
    assert!(cards.windows(2).all(|pair| pair[0].rank >= pair[1].rank));
}

#[test]
fn sort_matches_named_step() {
    let shuffled = deckrs::new([Step::Shuffle(Seed::Fixed(5))]);

    let by_function = sort(by_suit_then_rank)(shuffled.clone());
    let by_step = deckrs::new([
        Step::Shuffle(Seed::Fixed(5)),
        Step::Sort(Order::SuitThenRank),
    ]);
    assert_eq!(by_function, by_step);
    assert_eq!(by_function, default_sort(shuffled));
}

#[test]
fn jokers_are_appended_with_distinct_ranks() {
    let cards = deckrs::new([jokers(3)]);
    assert_eq!(cards.len(), 55);
    assert_eq!(cards[..DECK_SIZE], deckrs::standard()[..]);

    let added: Vec<&Card> = cards.iter().filter(|card| card.is_joker()).collect();
    assert_eq!(added.len(), 3);
    let ranks: HashSet<u8> = added.iter().map(|card| card.rank.get()).collect();
    assert_eq!(ranks, HashSet::from([0, 1, 2]));
}

#[test]
fn zero_jokers_is_a_no_op() {
    assert_eq!(deckrs::new([jokers(0)]), deckrs::standard());
}

#[test]
fn jokers_sort_last() {
    for order in [Order::SuitThenRank, Order::RankThenSuit] {
        let cards = deckrs::new([
            Step::Jokers(2),
            Step::Shuffle(Seed::Fixed(3)),
            Step::Sort(order),
        ]);

        assert_eq!(cards.len(), DECK_SIZE + 2);
        assert_eq!(cards[DECK_SIZE], Card::joker(0));
        assert_eq!(cards[DECK_SIZE + 1], Card::joker(1));
        assert!(cards[..DECK_SIZE].iter().all(|card| !card.is_joker()));
    }
}

#[test]
fn filter_drops_matching_cards_in_order() {
    let cards = deckrs::new([filter(|card| card.suit == Suit::Heart)]);
    assert_eq!(cards.len(), 39);
    assert!(cards.iter().all(|card| card.suit != Suit::Heart));

    let expected: Vec<Card> = deckrs::standard()
        .into_iter()
        .filter(|card| card.suit != Suit::Heart)
        .collect();
    assert_eq!(cards, expected);
}

#[test]
fn filter_extremes() {
    assert!(deckrs::new([filter(|_| true)]).is_empty());
    assert_eq!(deckrs::new([filter(|_| false)]), deckrs::standard());
}

#[test]
fn decks_repeat_the_input() {
    let cards = deckrs::new([decks(3)]);
    assert_eq!(cards.len(), 156);

    let counts = counts(&cards);
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&count| count == 3));
    assert_eq!(cards[..DECK_SIZE], cards[DECK_SIZE..2 * DECK_SIZE]);
}

#[test]
fn decks_edge_counts() {
    assert!(deckrs::new([decks(0)]).is_empty());
    assert_eq!(deckrs::new([decks(1)]), deckrs::standard());
}

#[cfg(feature = "std")]
#[test]
fn shuffle_is_a_permutation() {
    let cards = deckrs::new([shuffle]);
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(sorted(cards), deckrs::standard());
}

#[test_log::test]
fn seeded_shuffles_are_reproducible() {
    let first = deckrs::new([Step::Shuffle(Seed::Fixed(42))]);
    let second = deckrs::new([Step::Shuffle(Seed::Fixed(42))]);
    assert_eq!(first, second);
    assert_ne!(first, deckrs::standard());
    assert_eq!(sorted(first.clone()), deckrs::standard());

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    assert_eq!(deckrs::new([shuffle_with(&mut rng)]), first);

    let other = deckrs::new([Step::Shuffle(Seed::Fixed(43))]);
    assert_ne!(first, other);
}

#[test]
fn shuffle_with_advances_the_generator() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut step = shuffle_with(&mut rng);
    let first = step(deckrs::standard());
    let second = step(deckrs::standard());
    assert_ne!(first, second);
}

#[cfg(feature = "std")]
#[test]
fn clock_seeded_step_is_a_permutation() {
    let cards = deckrs::new([Step::Jokers(1), Step::Shuffle(Seed::Clock)]);
    assert_eq!(cards.len(), DECK_SIZE + 1);
    assert_eq!(cards.iter().filter(|card| card.is_joker()).count(), 1);
}

#[test]
fn steps_apply_in_order() {
    let decks_first = Pipeline::new().with_decks(2).with_jokers(2).build();
    assert_eq!(decks_first.len(), 2 * DECK_SIZE + 2);
    assert_eq!(decks_first.iter().filter(|card| card.is_joker()).count(), 2);

    let jokers_first = Pipeline::new().with_jokers(2).with_decks(2).build();
    assert_eq!(jokers_first.len(), 2 * DECK_SIZE + 4);
    assert_eq!(jokers_first.iter().filter(|card| card.is_joker()).count(), 4);
}

#[test]
fn boxed_closures_mix_in_one_call() {
    let mut steps: Vec<Box<dyn FnMut(Vec<Card>) -> Vec<Card>>> = Vec::new();
    steps.push(Box::new(jokers(1)));
    steps.push(Box::new(filter(|card| card.rank == Rank::ACE)));
    steps.push(Box::new(default_sort));
    steps.push(Box::new(decks(2)));
    let cards = deckrs::new(steps);

    assert_eq!(cards.len(), 2 * (DECK_SIZE - 4 + 1));
    assert_eq!(cards[0], Card::new(Suit::Spade, Rank::TWO));
    assert_eq!(cards[DECK_SIZE - 4], Card::joker(0));
}

#[test_log::test]
fn pipeline_accepts_custom_steps() {
    let banned = Rank::SEVEN;
    let pipeline = Pipeline::new()
        .with_filter(move |card| card.rank == banned)
        .with_step(Step::Sort(Order::RankThenSuit))
        .with(sort(by_descending_rank))
        .with_shuffle(Seed::Fixed(1))
        .with_sort(Order::SuitThenRank);
    assert_eq!(pipeline.len(), 5);
    assert!(!pipeline.is_empty());

    let cards = pipeline.build();
    assert_eq!(cards.len(), 48);
    assert!(cards.iter().all(|card| card.rank != banned));
    assert_eq!(cards[0], Card::new(Suit::Spade, Rank::ACE));
}

#[test]
fn empty_pipeline_builds_the_standard_deck() {
    let pipeline = Pipeline::default();
    assert!(pipeline.is_empty());
    assert_eq!(pipeline.build(), deckrs::standard());
}

#[test]
fn steps_print_their_arguments() {
    assert_eq!(format!("{:?}", Step::Jokers(2)), "Jokers(2)");
    assert_eq!(format!("{:?}", Step::Repeat(6)), "Repeat(6)");
    assert_eq!(
        format!("{:?}", Step::Sort(Order::RankThenSuit)),
        "Sort(RankThenSuit)"
    );
    assert_eq!(
        format!("{:?}", Step::Shuffle(Seed::Fixed(9))),
        "Shuffle(Fixed(9))"
    );
    assert_eq!(
        format!("{:?}", Step::FilterOut(|card| card.is_joker())),
        "FilterOut(..)"
    );
}

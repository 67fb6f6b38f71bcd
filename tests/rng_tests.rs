//! RNG tests for baccarat-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие шузов
//! - корректную работу shuffle()
//! - отсутствие лишних/потерянных карт в шузе
//! - авто-пересборку пустого шуза

use std::collections::HashMap;

use baccarat_engine::domain::card::Card;
use baccarat_engine::domain::deck::Deck;
use baccarat_engine::engine::{RandomSource, Shoe};
use baccarat_engine::infra::{DeterministicRng, SystemRng};

fn drain_cards(shoe: &mut Shoe, rng: &mut impl RandomSource, n: usize) -> Vec<Card> {
    (0..n).map(|_| shoe.draw(rng)).collect()
}

//
// TEST 1 — DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 — different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

//
// TEST 3 — shuffle keeps the same multiset of cards
//
#[test]
fn shuffle_keeps_every_card() {
    let mut rng = DeterministicRng::from_seed(7);
    let mut deck = Deck::standard_52();
    let original = deck.cards.clone();

    rng.shuffle(&mut deck.cards);

    assert_eq!(deck.len(), 52);
    for card in &original {
        assert!(deck.cards.contains(card), "card {card} lost in shuffle");
    }
    assert_ne!(deck.cards, original, "shuffle should change the order");
}

//
// TEST 3b — shuffle goes through rand's SliceRandom
//
#[test]
fn deterministic_shuffle_matches_slice_random() {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    let mut ours: Vec<u32> = (0..416).collect();
    DeterministicRng::from_seed(5).shuffle(&mut ours);

    let mut expected: Vec<u32> = (0..416).collect();
    expected.shuffle(&mut StdRng::seed_from_u64(5));

    assert_eq!(ours, expected);
}

#[test]
fn system_rng_shuffle_keeps_every_card() {
    let mut deck = Deck::multi_deck(8);
    let mut sorted = deck.cards.clone();

    let mut rng = SystemRng;
    rng.shuffle(&mut deck.cards);

    assert_eq!(deck.len(), 416);
    let mut shuffled = deck.cards.clone();
    shuffled.sort_by_key(|c| c.to_string());
    sorted.sort_by_key(|c| c.to_string());
    assert_eq!(shuffled, sorted);
}

//
// TEST 4 — next_below stays in range
//
#[test]
fn next_below_in_range() {
    let mut det = DeterministicRng::from_seed(99);
    let mut sys = SystemRng;

    for upper in 1..100 {
        assert!(det.next_below(upper) < upper);
        assert!(sys.next_below(upper) < upper);
    }
    assert_eq!(det.next_below(1), 0);
}

//
// TEST 5 — a fresh shoe has decks × 52 cards, each card `decks` times
//
#[test]
fn fresh_shoe_composition() {
    let mut rng = DeterministicRng::from_seed(5);
    let mut shoe = Shoe::new(6, &mut rng);

    assert_eq!(shoe.remaining(), 312);
    assert_eq!(shoe.decks(), 6);
    assert_eq!(shoe.shuffles(), 1);

    let cards = drain_cards(&mut shoe, &mut rng, 312);
    let mut counts: HashMap<Card, usize> = HashMap::new();
    for card in cards {
        *counts.entry(card).or_default() += 1;
    }
    assert_eq!(counts.len(), 52);
    assert!(counts.values().all(|&n| n == 6));
    assert_eq!(shoe.remaining(), 0);
}

//
// TEST 6 — same seed, same shoe order
//
#[test]
fn same_seed_same_shoe() {
    let mut r1 = DeterministicRng::from_seed(2024);
    let mut r2 = DeterministicRng::from_seed(2024);

    let mut s1 = Shoe::new(8, &mut r1);
    let mut s2 = Shoe::new(8, &mut r2);

    assert_eq!(drain_cards(&mut s1, &mut r1, 40), drain_cards(&mut s2, &mut r2, 40));
}

//
// TEST 7 — empty shoe reshuffles itself on draw
//
#[test]
fn empty_shoe_reshuffles_on_draw() {
    let mut rng = DeterministicRng::from_seed(1);
    let mut shoe = Shoe::new(1, &mut rng);

    drain_cards(&mut shoe, &mut rng, 52);
    assert_eq!(shoe.remaining(), 0);

    let _ = shoe.draw(&mut rng);
    assert_eq!(shoe.shuffles(), 2);
    assert_eq!(shoe.remaining(), 51);
}

//
// TEST 8 — stacked shoe deals in the given order, then falls back to a fresh shoe
//
#[test]
fn stacked_shoe_order_and_fallback() {
    let mut rng = DeterministicRng::from_seed(3);
    let order: Vec<Card> = ["As", "Kd", "5h"].iter().map(|s| s.parse().unwrap()).collect();
    let mut shoe = Shoe::stacked(2, order.clone());

    assert_eq!(drain_cards(&mut shoe, &mut rng, 3), order);
    assert_eq!(shoe.shuffles(), 0);

    let _ = shoe.draw(&mut rng);
    assert_eq!(shoe.shuffles(), 1);
    assert_eq!(shoe.remaining(), 2 * 52 - 1);
}

//
// TEST 9 — explicit reshuffle drops remaining cards
//
#[test]
fn explicit_reshuffle_resets_shoe() {
    let mut rng = DeterministicRng::from_seed(10);
    let mut shoe = Shoe::new(2, &mut rng);
    drain_cards(&mut shoe, &mut rng, 30);

    shoe.reshuffle(&mut rng);
    assert_eq!(shoe.remaining(), 104);
    assert_eq!(shoe.shuffles(), 2);
}

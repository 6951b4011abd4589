use std::collections::HashSet;

use holdem_engine::cards::{full_deck, Card};
use holdem_engine::deck::Deck;
use holdem_engine::errors::GameError;
use holdem_engine::rng::{RandomSource, SeededRandom};

#[test]
fn same_seed_same_order() {
    let (mut a, mut b) = (Deck::new(1), Deck::new(1));
    a.shuffle(&mut SeededRandom::new(42));
    b.shuffle(&mut SeededRandom::new(42));
    assert_eq!(a.cards(), b.cards());
}

#[test]
fn different_seeds_differ() {
    let (mut a, mut b) = (Deck::new(1), Deck::new(1));
    a.shuffle(&mut SeededRandom::new(1));
    b.shuffle(&mut SeededRandom::new(2));
    assert_ne!(a.cards(), b.cards());
}

#[test]
fn shuffle_keeps_every_card() {
    let mut d = Deck::new(1);
    d.shuffle(&mut SeededRandom::new(99));
    let seen: HashSet<Card> = d.cards().iter().copied().collect();
    assert_eq!(seen.len(), 52);
    assert_eq!(seen, full_deck().into_iter().collect::<HashSet<Card>>());
}

#[test]
fn deal_and_burn_consume_from_the_front() {
    let mut d = Deck::new(1);
    d.shuffle(&mut SeededRandom::new(5));
    let order: Vec<Card> = d.cards().to_vec();
    assert_eq!(d.deal().unwrap(), order[0]);
    d.burn(1).unwrap();
    assert_eq!(d.deal().unwrap(), order[2]);
    assert_eq!(d.remaining(), 49);
}

#[test]
fn exhausted_shoe_errors() {
    let mut d = Deck::new(1);
    d.burn(51).unwrap();
    assert!(d.deal().is_ok());
    assert_eq!(d.deal(), Err(GameError::DeckExhausted));
    assert_eq!(d.burn(1), Err(GameError::DeckExhausted));
}

#[test]
fn multi_deck_shoe_holds_duplicates() {
    let d = Deck::new(2);
    assert_eq!(d.remaining(), 104);
    let unique: HashSet<Card> = d.cards().iter().copied().collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn pick_and_uniform_stay_in_range() {
    let mut rng = SeededRandom::new(3);
    for _ in 0..200 {
        assert!(rng.pick(5) < 5);
        let u = rng.uniform();
        assert!((0.0..1.0).contains(&u));
    }
}

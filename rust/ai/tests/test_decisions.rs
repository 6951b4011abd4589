use std::collections::VecDeque;

use holdem_ai::{create_ai, AiParams, DecisionPolicy, HoldemAI, PolicyError};
use holdem_engine::cards::Card;
use holdem_engine::hand::Hand;
use holdem_engine::logger::Street;
use holdem_engine::player::PlayerAction;
use holdem_engine::policy::TurnContext;
use holdem_engine::rng::RandomSource;

/// Replays fixed uniform draws; 0.99 (never a bluff) once exhausted.
struct Draws {
    values: VecDeque<f64>,
    taken: usize,
}

impl Draws {
    fn new(values: &[f64]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            taken: 0,
        }
    }
}

impl RandomSource for Draws {
    fn shuffle(&mut self, _cards: &mut [Card]) {}
    fn uniform(&mut self) -> f64 {
        self.taken += 1;
        self.values.pop_front().unwrap_or(0.99)
    }
    fn pick(&mut self, _n: usize) -> usize {
        0
    }
}

fn hand(shorthand: &str) -> Hand {
    let mut h = Hand::new();
    for c in shorthand.split_whitespace() {
        h.add(c.parse().unwrap());
    }
    h
}

fn ctx<'a>(street: Street, hand: &'a Hand) -> TurnContext<'a> {
    TurnContext {
        street,
        hand,
        bankroll: 100,
        bet: 0,
        call_cost: 5,
        can_raise: true,
        pot: 7,
        players_not_folded: 5,
    }
}

#[test]
fn premium_pair_raises_fixed_amount() {
    let ai = HoldemAI::default();
    let h = hand("KS KD");
    let mut rng = Draws::new(&[]);
    assert_eq!(ai.decide(&ctx(Street::Preflop, &h), &mut rng), PlayerAction::Raise(5));
    assert_eq!(rng.taken, 0);
}

#[test]
fn raise_hand_calls_when_raising_is_closed() {
    let ai = HoldemAI::default();
    let h = hand("AS KD");
    let c = TurnContext {
        can_raise: false,
        ..ctx(Street::Preflop, &h)
    };
    assert_eq!(ai.decide(&c, &mut Draws::new(&[])), PlayerAction::Call);
}

#[test]
fn suitedness_picks_the_column() {
    let ai = HoldemAI::default();
    let suited = hand("AS 6S");
    let offsuit = hand("AS 6D");
    assert_eq!(
        ai.decide(&ctx(Street::Preflop, &suited), &mut Draws::new(&[0.9])),
        PlayerAction::Call
    );
    assert_eq!(
        ai.decide(&ctx(Street::Preflop, &offsuit), &mut Draws::new(&[0.9, 0.9])),
        PlayerAction::Fold
    );
}

#[test]
fn trash_hand_bluffs_upward_only() {
    let ai = HoldemAI::default();
    let h = hand("7C 2D");
    let c = ctx(Street::Preflop, &h);
    assert_eq!(ai.decide(&c, &mut Draws::new(&[0.1])), PlayerAction::Raise(5));
    assert_eq!(ai.decide(&c, &mut Draws::new(&[0.9, 0.1])), PlayerAction::Call);
    assert_eq!(ai.decide(&c, &mut Draws::new(&[0.9, 0.9])), PlayerAction::Fold);
}

#[test]
fn trash_hand_checks_when_already_matched() {
    let ai = HoldemAI::default();
    let h = hand("7C 2D");
    let c = TurnContext {
        bet: 5,
        ..ctx(Street::Preflop, &h)
    };
    assert_eq!(ai.decide(&c, &mut Draws::new(&[0.9])), PlayerAction::Call);
}

#[test]
fn custom_raise_size_is_used() {
    let ai = HoldemAI::new(AiParams {
        raise: 12,
        bluff: 0.0,
    });
    let h = hand("AS AD");
    assert_eq!(ai.decide(&ctx(Street::Preflop, &h), &mut Draws::new(&[])), PlayerAction::Raise(12));
}

#[test]
fn monster_on_the_river_raises_what_it_can_afford() {
    let ai = HoldemAI::default();
    let h = hand("7S 7D 7C 7H KS 2D 3C");
    let c = TurnContext {
        bankroll: 50,
        bet: 10,
        call_cost: 10,
        pot: 100,
        players_not_folded: 2,
        ..ctx(Street::River, &h)
    };
    // 100 * 0.97^2 - 10 = 84.09, capped by the 50 it can afford
    assert_eq!(ai.decide(&c, &mut Draws::new(&[])), PlayerAction::Raise(50));

    let closed = TurnContext {
        can_raise: false,
        ..c
    };
    assert_eq!(ai.decide(&closed, &mut Draws::new(&[0.0])), PlayerAction::Call);
}

#[test]
fn weak_river_hand_folds_when_behind() {
    let ai = HoldemAI::default();
    let h = hand("2C 3D 5H 7S 9C JD KH");
    let c = TurnContext {
        bet: 5,
        call_cost: 20,
        pot: 50,
        can_raise: false,
        players_not_folded: 3,
        ..ctx(Street::River, &h)
    };
    assert_eq!(ai.decide(&c, &mut Draws::new(&[])), PlayerAction::Fold);

    let matched = TurnContext { call_cost: 5, ..c };
    assert_eq!(ai.decide(&matched, &mut Draws::new(&[])), PlayerAction::Call);
}

#[test]
fn weak_river_hand_sometimes_bluffs() {
    let ai = HoldemAI::default();
    let h = hand("2C 3D 5H 7S 9C JD KH");
    let c = TurnContext {
        bet: 5,
        call_cost: 20,
        pot: 50,
        players_not_folded: 3,
        ..ctx(Street::River, &h)
    };
    assert_eq!(ai.decide(&c, &mut Draws::new(&[0.1])), PlayerAction::Raise(5));
    assert_eq!(ai.decide(&c, &mut Draws::new(&[0.9])), PlayerAction::Fold);
}

#[test]
fn flopped_set_looks_ahead_and_raises() {
    let ai = HoldemAI::default();
    let h = hand("AS AD AC KH 2D");
    let c = TurnContext {
        bet: 5,
        call_cost: 5,
        pot: 40,
        players_not_folded: 2,
        ..ctx(Street::Flop, &h)
    };
    match ai.decide(&c, &mut Draws::new(&[])) {
        PlayerAction::Raise(n) => assert!(n > 20, "raised only {n}"),
        other => panic!("expected a raise, got {other:?}"),
    }
}

#[test]
fn factory_knows_its_policies() {
    let ai = create_ai("holdem", AiParams::default()).unwrap();
    assert_eq!(ai.name(), "holdem");
    assert!(matches!(
        create_ai("baseline", AiParams::default()),
        Err(PolicyError::UnknownPolicy(name)) if name == "baseline"
    ));
}

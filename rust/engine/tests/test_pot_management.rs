use holdem_engine::errors::GameError;
use holdem_engine::player::{ActionTaken, Player};
use holdem_engine::pot::resolve_pot;

fn seat(name: &str, bankroll: u32, cards: &str) -> Player {
    let mut p = Player::new(name, bankroll, false);
    for c in cards.split_whitespace() {
        p.hand_mut().add(c.parse().unwrap());
    }
    p
}

#[test]
fn short_stack_wins_only_its_side_pot() {
    let mut players = vec![
        seat("A", 10, "AS AD AC AH KS"),
        seat("B", 100, "KD KC 2S 5H 9C"),
        seat("C", 100, "QS 3D 4C 7H 8D"),
    ];
    assert_eq!(players[0].call(30), ActionTaken::PartialAllIn { amount: 10 });
    assert!(players[0].side_pot_only());
    players[1].call(30);
    players[2].call(30);

    let s = resolve_pot(&mut players, 3, 70).unwrap();

    assert_eq!(s.payouts[0].seat, 0);
    assert_eq!(s.payouts[0].amount, 30);
    assert!(s.payouts[0].side_pot);
    assert_eq!(s.winners, vec![1]);
    assert_eq!(players[0].bankroll(), 30);
    assert_eq!(players[1].bankroll(), 110);
    assert_eq!(players[2].bankroll(), 70);
}

#[test]
fn side_pot_cap_leaves_the_rest_to_the_next_tier() {
    let mut players = vec![
        seat("A", 20, "AS AD AC AH KS"),
        seat("B", 100, "KD KC 2S 5H 9C"),
    ];
    players[0].call(25);
    players[1].call(25);
    // A is capped at 20 * 2 * 1 = 40 of the 45
    let s = resolve_pot(&mut players, 2, 45).unwrap();
    assert_eq!(players[0].bankroll(), 40);
    assert_eq!(players[1].bankroll(), 80);
    assert_eq!(s.payouts.iter().map(|p| p.amount).sum::<u32>(), 45);
}

#[test]
fn tied_tier_splits_with_remainder_to_last() {
    let mut players = vec![
        seat("A", 100, "AS KD 2C 7H 9D"),
        seat("B", 100, "AD KS 2D 7C 9S"),
    ];
    players[0].call(8);
    players[1].call(7);
    let s = resolve_pot(&mut players, 2, 15).unwrap();
    assert_eq!(s.winners, vec![0, 1]);
    let amounts: Vec<u32> = s.payouts.iter().map(|p| p.amount).collect();
    assert_eq!(amounts, vec![8, 7]);
}

#[test]
fn folded_seats_are_paid_only_after_live_ones() {
    let mut players = vec![
        seat("A", 100, "AS AD AC 7H 9D"),
        seat("B", 100, "2S 3D 8C 9H JD"),
    ];
    players[0].call(5);
    players[1].call(5);
    players[0].fold();
    let s = resolve_pot(&mut players, 1, 10).unwrap();
    assert_eq!(s.winners, vec![1]);
    assert_eq!(players[1].bankroll(), 105);
}

#[test]
fn pot_with_no_one_to_pay_is_reported() {
    let mut players: Vec<Player> = Vec::new();
    assert_eq!(
        resolve_pot(&mut players, 0, 5),
        Err(GameError::UndistributedPot { remaining: 5 })
    );
}

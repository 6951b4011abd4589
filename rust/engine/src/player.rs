use serde::{Deserialize, Serialize};

use crate::hand::Hand;

/// A decision handed to the engine by an AI policy or the human seat.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the round
    Fold,
    /// Match the current call cost (a check when already matched)
    Call,
    /// Raise the call cost by the given number of chips
    Raise(u32),
}

/// What an action actually did once bankroll limits were applied.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ActionTaken {
    Check,
    Call { amount: u32 },
    /// Called with exactly the remaining bankroll.
    AllInCall { amount: u32 },
    /// Could not cover the call; eligible for a side pot only.
    PartialAllIn { amount: u32 },
    Raise { by: u32, to: u32 },
    Fold,
}

impl ActionTaken {
    pub fn describe(&self, name: &str) -> String {
        match self {
            ActionTaken::Check => format!("{} has decided to check", name),
            ActionTaken::Call { .. } => format!("{} has decided to call", name),
            ActionTaken::AllInCall { .. } => format!("{} has decided to go all in to call!", name),
            ActionTaken::PartialAllIn { .. } => {
                format!("{} has decided to go all in to match part of the bet!", name)
            }
            ActionTaken::Raise { by, to } => format!(
                "{} has decided to raise the bet by ${}!\nThe current bet is now set at ${}",
                name, by, to
            ),
            ActionTaken::Fold => format!("{} has decided to fold!", name),
        }
    }
}

/// A seat at the table: bankroll, this round's contribution, and cards.
///
/// `bankroll` and `bet` only move through [`Player::sub_from_bankroll`] and
/// [`Player::add_to_bankroll`]; the bankroll can never go below zero.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    bankroll: u32,
    /// Chips put in during the current round
    bet: u32,
    is_human: bool,
    has_folded: bool,
    /// All in below the final call cost
    side_pot_only: bool,
    hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>, bankroll: u32, is_human: bool) -> Self {
        Self {
            name: name.into(),
            bankroll,
            bet: 0,
            is_human,
            has_folded: false,
            side_pot_only: false,
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
    pub fn bankroll(&self) -> u32 {
        self.bankroll
    }
    pub fn set_bankroll(&mut self, bankroll: u32) {
        self.bankroll = bankroll;
    }
    pub fn bet(&self) -> u32 {
        self.bet
    }
    pub fn is_human(&self) -> bool {
        self.is_human
    }
    pub fn has_folded(&self) -> bool {
        self.has_folded
    }
    pub fn side_pot_only(&self) -> bool {
        self.side_pot_only
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn add_to_bankroll(&mut self, amount: u32) -> u32 {
        self.bankroll = self.bankroll.saturating_add(amount);
        amount
    }

    /// Moves up to `amount` chips from the bankroll into this round's bet and
    /// returns how many actually moved.
    pub fn sub_from_bankroll(&mut self, amount: u32) -> u32 {
        let moved = amount.min(self.bankroll);
        self.bankroll -= moved;
        self.bet += moved;
        moved
    }

    /// Clears everything except name, bankroll and humanity.
    pub fn reset(&mut self) {
        self.bet = 0;
        self.has_folded = false;
        self.side_pot_only = false;
        self.hand.clear();
    }

    pub fn is_bankrupt(&self) -> bool {
        self.bankroll == 0
    }

    /// Largest raise on top of `call_cost` this seat can cover; negative when
    /// it cannot even afford the call.
    pub fn max_raise(&self, call_cost: u32) -> i64 {
        self.bankroll as i64 + self.bet as i64 - call_cost as i64
    }

    /// True when this seat has nothing to do: folded, all in, or already
    /// matched with no raise available. Also flags an all-in seat as
    /// side-pot-only once the call cost has moved past its bet.
    pub fn cannot_play(&mut self, call_cost: u32, can_raise: bool) -> bool {
        if self.is_bankrupt() && call_cost > self.bet {
            self.side_pot_only = true;
        }
        self.has_folded || self.is_bankrupt() || (call_cost == self.bet && !can_raise)
    }

    pub fn call(&mut self, call_cost: u32) -> ActionTaken {
        let owed = call_cost.saturating_sub(self.bet);
        let taken = if owed == 0 {
            ActionTaken::Check
        } else if owed == self.bankroll {
            ActionTaken::AllInCall { amount: owed }
        } else if owed > self.bankroll {
            self.side_pot_only = true;
            ActionTaken::PartialAllIn {
                amount: self.bankroll,
            }
        } else {
            ActionTaken::Call { amount: owed }
        };
        self.sub_from_bankroll(owed);
        taken
    }

    /// Raises by `amount`, returning the new call cost. An unaffordable raise
    /// becomes a call.
    pub fn raise(&mut self, call_cost: u32, amount: u32) -> (u32, ActionTaken) {
        let target = call_cost as u64 + amount as u64;
        if amount == 0 || target > self.bankroll as u64 + self.bet as u64 {
            return (call_cost, self.call(call_cost));
        }
        let to = call_cost + amount;
        self.sub_from_bankroll(to - self.bet);
        (to, ActionTaken::Raise { by: amount, to })
    }

    pub fn fold(&mut self) -> ActionTaken {
        self.has_folded = true;
        ActionTaken::Fold
    }

    /// Showdown narration line.
    pub fn showdown_line(&self) -> String {
        let label = self.hand.best_hand().unwrap_or("High Card");
        if self.has_folded {
            format!(
                "{} folded, but they had unique cards {} and a {}",
                self.name, self.hand, label
            )
        } else {
            format!("{} has unique cards {} and a {}", self.name, self.hand, label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_from_bankroll_clamps_at_zero() {
        let mut p = Player::new("Ann", 10, false);
        assert_eq!(p.sub_from_bankroll(4), 4);
        assert_eq!(p.sub_from_bankroll(20), 6);
        assert_eq!(p.bankroll(), 0);
        assert_eq!(p.bet(), 10);
    }

    #[test]
    fn call_variants() {
        let mut p = Player::new("Ann", 10, false);
        assert_eq!(p.call(0), ActionTaken::Check);
        assert_eq!(p.call(4), ActionTaken::Call { amount: 4 });
        assert_eq!(p.call(10), ActionTaken::AllInCall { amount: 6 });
        assert!(!p.side_pot_only());

        let mut q = Player::new("Bo", 3, false);
        assert_eq!(q.call(5), ActionTaken::PartialAllIn { amount: 3 });
        assert!(q.side_pot_only());
        assert_eq!(q.bet(), 3);
        assert_eq!(q.bankroll(), 0);
    }

    #[test]
    fn unaffordable_raise_downgrades_to_call() {
        let mut p = Player::new("Cy", 8, false);
        let (cost, taken) = p.raise(5, 5);
        assert_eq!(cost, 5);
        assert_eq!(taken, ActionTaken::Call { amount: 5 });
        assert_eq!(p.bankroll(), 3);
    }

    #[test]
    fn raise_moves_chips_to_new_cost() {
        let mut p = Player::new("Di", 100, false);
        p.sub_from_bankroll(2);
        let (cost, taken) = p.raise(5, 5);
        assert_eq!(cost, 10);
        assert_eq!(taken, ActionTaken::Raise { by: 5, to: 10 });
        assert_eq!(p.bet(), 10);
        assert_eq!(p.bankroll(), 92);
    }

    #[test]
    fn cannot_play_flags_side_pot() {
        let mut p = Player::new("Ed", 5, false);
        p.call(5);
        assert!(p.cannot_play(5, true));
        assert!(!p.side_pot_only());
        assert!(p.cannot_play(10, true));
        assert!(p.side_pot_only());
    }

    #[test]
    fn matched_seat_without_raise_is_skipped() {
        let mut p = Player::new("Flo", 50, false);
        p.call(5);
        assert!(p.cannot_play(5, false));
        assert!(!p.cannot_play(5, true));
        assert!(!p.cannot_play(10, false));
    }
}

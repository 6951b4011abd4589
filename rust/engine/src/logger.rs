use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::ActionTaken;

/// Represents a betting street in Texas Hold'em poker.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Blinds and betting on the opening hands
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    pub const POSTFLOP: [Street; 3] = [Street::Flop, Street::Turn, Street::River];
}

/// Records a single seat action during a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index in the table order
    pub seat: usize,
    pub street: Street,
    pub action: ActionTaken,
    /// Pot after the action
    pub pot: u32,
}

/// Chips handed to one seat at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub seat: usize,
    pub amount: u32,
    /// Paid from a capped side pot rather than the whole remaining pot
    pub side_pot: bool,
}

/// Complete record of one round: every action, the board and the payouts.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Format: R-NNNNNN
    pub round_id: String,
    pub seed: Option<u64>,
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    pub pot: u32,
    pub payouts: Vec<Payout>,
    /// Seats of the final (main pot) winning tier
    pub winners: Vec<usize>,
}

impl RoundRecord {
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Total chips paid to `seat`.
    pub fn paid_to(&self, seat: usize) -> u32 {
        self.payouts
            .iter()
            .filter(|p| p.seat == seat)
            .map(|p| p.amount)
            .sum()
    }
}

pub fn format_round_id(round: u32) -> String {
    format!("R-{:06}", round)
}

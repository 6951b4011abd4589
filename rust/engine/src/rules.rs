use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Fixed parameters of a table. Defaults match a five-seat home game:
/// blinds 2/5, one deck, one burn card before each 3/1/1 reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    pub small_blind: u32,
    pub big_blind: u32,
    /// Community cards revealed on flop, turn and river
    pub community_cards: [usize; 3],
    pub burn_per_street: usize,
    pub num_decks: usize,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            small_blind: 2,
            big_blind: 5,
            community_cards: [3, 1, 1],
            burn_per_street: 1,
            num_decks: 1,
        }
    }
}

impl TableRules {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == 0 || self.big_blind < self.small_blind {
            return Err(GameError::InvalidRules(format!(
                "blinds must satisfy 0 < small ({}) <= big ({})",
                self.small_blind, self.big_blind
            )));
        }
        if self.num_decks == 0 {
            return Err(GameError::InvalidRules("num_decks must be >= 1".into()));
        }
        let board: usize = self.community_cards.iter().sum();
        if board + 2 > crate::hand::MAX_SCORED_CARDS {
            return Err(GameError::InvalidRules(format!(
                "board of {} cards leaves hands larger than 7",
                board
            )));
        }
        Ok(())
    }

    /// Cards a full round can consume with `players` seats.
    pub fn cards_needed(&self, players: usize) -> usize {
        players * 2
            + self.community_cards.iter().sum::<usize>()
            + self.burn_per_street * self.community_cards.len()
    }
}

/// Whether the seat visited at `pass_index` (counted from the first player
/// of the rotation, blinds included) may raise.
///
/// Raising is open only during the first trip around the table after the
/// blinds, and only while more than one seat can still put chips in.
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::can_raise;
///
/// // Five seats: indices 2..=6 form the first full pass.
/// assert!(can_raise(2, 5, 5, 0));
/// assert!(can_raise(6, 5, 5, 0));
/// assert!(!can_raise(7, 5, 5, 0));
/// // Everyone but one seat is all in: nobody left to raise against.
/// assert!(!can_raise(3, 5, 4, 3));
/// ```
pub fn can_raise(
    pass_index: usize,
    total_players: usize,
    players_in_round: usize,
    players_all_in: usize,
) -> bool {
    pass_index < total_players + 2 && players_in_round.saturating_sub(players_all_in) > 1
}

use tracing::info;

use crate::player::Player;

/// Where a session stands once a round has been settled.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SessionStatus {
    /// The human seat went bankrupt and was removed
    HumanBankrupt,
    /// Every opponent is gone
    LastPlayerStanding,
    /// The table can deal another round
    Continue,
}

/// How the human seat finished relative to its starting bank.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SessionResult {
    Profit(u32),
    BrokeEven,
    Loss(u32),
}

/// Long-lived table state across rounds: surviving players, the rotating
/// first seat and the round counter. The human seat, if any, sits last.
#[derive(Debug, Clone)]
pub struct GameState {
    players: Vec<Player>,
    first_player: usize,
    round: u32,
    seated_human: bool,
}

impl GameState {
    pub fn new(players: Vec<Player>, first_player: usize) -> Self {
        let first_player = if players.is_empty() {
            0
        } else {
            first_player % players.len()
        };
        let seated_human = players.iter().any(Player::is_human);
        Self {
            players,
            first_player,
            round: 1,
            seated_human,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }
    pub fn first_player(&self) -> usize {
        self.first_player
    }
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn human(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_human())
    }

    pub fn total_chips(&self) -> u64 {
        self.players.iter().map(|p| p.bankroll() as u64).sum()
    }

    /// Drops every bankrupt seat and returns their names.
    pub fn remove_bankrupt(&mut self) -> Vec<String> {
        let (broke, alive): (Vec<Player>, Vec<Player>) =
            std::mem::take(&mut self.players)
                .into_iter()
                .partition(|p| p.is_bankrupt());
        self.players = alive;
        let names: Vec<String> = broke.into_iter().map(|p| p.name().to_string()).collect();
        if !names.is_empty() {
            info!(removed = ?names, remaining = self.players.len(), "bankrupt players removed");
        }
        names
    }

    /// Tables seated without a human only end when one player is left.
    pub fn status(&self) -> SessionStatus {
        if self.seated_human && self.human().is_none() {
            SessionStatus::HumanBankrupt
        } else if self.players.len() <= 1 {
            SessionStatus::LastPlayerStanding
        } else {
            SessionStatus::Continue
        }
    }

    /// Moves the first seat along and bumps the round counter.
    pub fn advance(&mut self) {
        self.round += 1;
        if !self.players.is_empty() {
            self.first_player = (self.first_player + 1) % self.players.len();
        }
    }

    pub fn human_result(&self, starting_bank: u32) -> Option<SessionResult> {
        let bank = self.human()?.bankroll();
        Some(match bank.cmp(&starting_bank) {
            std::cmp::Ordering::Greater => SessionResult::Profit(bank - starting_bank),
            std::cmp::Ordering::Equal => SessionResult::BrokeEven,
            std::cmp::Ordering::Less => SessionResult::Loss(starting_bank - bank),
        })
    }
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Hand must hold between 2 and 7 cards to be scored, got {0}")]
    InvalidHandSize(usize),
    #[error("Card {0} is not in the hand")]
    CardNotInHand(String),
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("A round needs at least {minimum} players, got {actual}")]
    NotEnoughPlayers { minimum: usize, actual: usize },
    #[error("Pot resolution left {remaining} chips with no eligible player")]
    UndistributedPot { remaining: u32 },
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Invalid table rules: {0}")]
    InvalidRules(String),
}

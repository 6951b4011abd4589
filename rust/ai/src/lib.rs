//! # holdem-ai: computer opponents for the Hold'em table
//!
//! Provides the [`DecisionPolicy`] implementations that drive non-human
//! seats, plus the data and helpers they are built from.
//!
//! ## Core Components
//!
//! - [`holdem::HoldemAI`] - Table-driven pre-flop, enumeration-driven post-flop
//! - [`preflop`] - The 91-entry opening hand lookup table
//! - [`combinations`] - Iterative k-combination enumerator
//! - [`create_ai`] - Factory for policies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::{create_ai, AiParams, DecisionPolicy};
//! use holdem_engine::hand::Hand;
//! use holdem_engine::logger::Street;
//! use holdem_engine::player::PlayerAction;
//! use holdem_engine::policy::TurnContext;
//! use holdem_engine::rng::SeededRandom;
//!
//! let ai = create_ai("holdem", AiParams::default()).unwrap();
//!
//! let mut hand = Hand::new();
//! hand.add("AS".parse().unwrap());
//! hand.add("AD".parse().unwrap());
//! let ctx = TurnContext {
//!     street: Street::Preflop,
//!     hand: &hand,
//!     bankroll: 100,
//!     bet: 0,
//!     call_cost: 5,
//!     can_raise: true,
//!     pot: 7,
//!     players_not_folded: 5,
//! };
//! assert_eq!(ai.decide(&ctx, &mut SeededRandom::new(1)), PlayerAction::Raise(5));
//! ```

use thiserror::Error;

pub use holdem_engine::policy::{DecisionPolicy, TurnContext};

pub mod combinations;
pub mod holdem;
pub mod preflop;

pub use holdem::HoldemAI;

/// Tuning knobs for the house AI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiParams {
    /// Chips added by table raises and bluff raises
    pub raise: u32,
    /// Probability of bluffing at each opportunity
    pub bluff: f64,
}

impl Default for AiParams {
    fn default() -> Self {
        Self {
            raise: 5,
            bluff: 0.25,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Preflop entry ({high}, {low}) is not a valid high/low rank pair")]
    InvalidEntry { high: u8, low: u8 },
    #[error("Preflop entry ({high}, {low}) appears more than once")]
    DuplicateEntry { high: u8, low: u8 },
    #[error("Preflop table has {actual} entries, expected {expected}")]
    IncompleteTable { expected: usize, actual: usize },
    #[error("Unknown AI type: {0}")]
    UnknownPolicy(String),
}

/// Names accepted by [`create_ai`].
pub const AI_TYPES: &[&str] = &["holdem"];

/// Creates a policy by type name.
///
/// # Example
///
/// ```rust
/// use holdem_ai::{create_ai, AiParams, DecisionPolicy, PolicyError};
///
/// let ai = create_ai("holdem", AiParams::default()).unwrap();
/// assert_eq!(ai.name(), "holdem");
/// assert!(matches!(create_ai("oracle", AiParams::default()), Err(PolicyError::UnknownPolicy(_))));
/// ```
pub fn create_ai(ai_type: &str, params: AiParams) -> Result<Box<dyn DecisionPolicy>, PolicyError> {
    match ai_type {
        "holdem" => Ok(Box::new(HoldemAI::new(params))),
        other => Err(PolicyError::UnknownPolicy(other.to_string())),
    }
}

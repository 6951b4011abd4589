//! # holdem-engine: Texas Hold'em round simulator core
//!
//! Plays multi-player Texas Hold'em rounds against a pluggable decision
//! policy: shuffling and dealing, blinds and two-pass betting, street
//! reveals, hand scoring and side-pot aware settlement. Randomness, human
//! input and narration are all injected so whole sessions replay exactly
//! from a seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the 52-card deck
//! - [`deck`] - Multi-deck shoe with dealing and burning
//! - [`hand`] - Hand container and banded numeric scoring
//! - [`player`] - Seat state, bankroll and betting actions
//! - [`rules`] - Blind structure and the raise window
//! - [`engine`] - Round orchestration: blinds, betting passes, streets, showdown
//! - [`pot`] - Winner ranking and side-pot distribution
//! - [`game`] - Multi-round session state and first-seat rotation
//! - [`policy`] - The decision seam for computer-controlled seats
//! - [`rng`] - Random source trait and the seeded ChaCha implementation
//! - [`io`] - Human input and narration seams
//! - [`logger`] - Per-round action records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::Card;
//! use holdem_engine::hand::{evaluate, Category};
//!
//! let cards: Vec<Card> = ["AH", "KH", "QH", "JH", "TH", "2C", "3D"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let score = evaluate(&cards).unwrap();
//! assert_eq!(score.category(), Category::RoyalFlush);
//! assert_eq!(score.value(), 134.0);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//! use holdem_engine::rng::SeededRandom;
//!
//! let (mut a, mut b) = (Deck::new(1), Deck::new(1));
//! a.shuffle(&mut SeededRandom::new(42));
//! b.shuffle(&mut SeededRandom::new(42));
//! assert_eq!(a.cards(), b.cards());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod io;
pub mod logger;
pub mod player;
pub mod policy;
pub mod pot;
pub mod rng;
pub mod rules;

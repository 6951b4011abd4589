//! The house AI: lookup table before the flop, exhaustive lookahead after.

use std::sync::LazyLock;

use holdem_engine::cards::{full_deck, Card};
use holdem_engine::hand::{Hand, MAX_SCORED_CARDS};
use holdem_engine::logger::Street;
use holdem_engine::player::PlayerAction;
use holdem_engine::policy::{DecisionPolicy, TurnContext};
use holdem_engine::rng::RandomSource;
use tracing::{trace, warn};

use crate::AiParams;
use crate::combinations::Combinations;
use crate::preflop::{Decision, PreflopPolicyTable};

// Probability oracle only; never dealt from.
static SAMPLE_DECK: LazyLock<Vec<Card>> = LazyLock::new(full_deck);

/// Chance this hand beats a single opponent, from its (average) score.
pub fn score_percentile(score: f64) -> f64 {
    if score > 90.0 {
        0.97
    } else if score > 75.0 {
        0.94
    } else if score > 60.0 {
        0.90
    } else if score > 45.0 {
        0.85
    } else if score > 30.0 {
        0.60
    } else if score > 15.0 {
        // pair band: 0.20 for deuces up to 0.56 for aces
        0.20 + (score - 17.0) * 0.03
    } else if score > 14.0 {
        0.10
    } else {
        0.05
    }
}

/// Stateless computer player.
///
/// Pre-flop it reads the opening hand from a [`PreflopPolicyTable`];
/// afterwards it averages the score of every way the hand could be completed
/// to seven cards and sizes its raise from the resulting win probability.
/// Random draws only decide bluffs.
#[derive(Debug, Clone)]
pub struct HoldemAI {
    table: &'static PreflopPolicyTable,
    params: AiParams,
}

impl Default for HoldemAI {
    fn default() -> Self {
        Self::new(AiParams::default())
    }
}

impl HoldemAI {
    pub fn new(params: AiParams) -> Self {
        Self {
            table: PreflopPolicyTable::standard(),
            params,
        }
    }

    pub fn with_table(table: &'static PreflopPolicyTable, params: AiParams) -> Self {
        Self { table, params }
    }

    pub fn params(&self) -> &AiParams {
        &self.params
    }

    fn bluffs(&self, rng: &mut dyn RandomSource) -> bool {
        rng.uniform() < self.params.bluff
    }

    fn preflop(&self, ctx: &TurnContext<'_>, rng: &mut dyn RandomSource) -> PlayerAction {
        let Some(decision) = ctx.hand.opening_hand().and_then(|h| self.table.decide(h)) else {
            warn!(cards = ctx.hand.len(), "no opening hand to look up, calling");
            return PlayerAction::Call;
        };

        if ctx.can_raise && (decision == Decision::Raise || self.bluffs(rng)) {
            PlayerAction::Raise(self.params.raise)
        } else if decision != Decision::Fold || ctx.call_cost == ctx.bet || self.bluffs(rng) {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        }
    }

    fn postflop(&self, ctx: &TurnContext<'_>, rng: &mut dyn RandomSource) -> PlayerAction {
        let Some(avg) = expected_score(ctx.hand) else {
            warn!(cards = ctx.hand.len(), "hand cannot be scored, calling");
            return PlayerAction::Call;
        };
        let percentile = score_percentile(avg);
        let win = percentile.powi(ctx.players_not_folded as i32);
        let target = ctx.pot as f64 * win - ctx.bet as f64;
        // truncates toward zero
        let optimal = (ctx.affordable_raise() as f64).min(target) as i64;
        trace!(avg, percentile, win, optimal, "postflop lookahead");

        if ctx.can_raise && optimal > 0 {
            PlayerAction::Raise(u32::try_from(optimal).unwrap_or(u32::MAX))
        } else if ctx.can_raise && self.bluffs(rng) {
            PlayerAction::Raise(self.params.raise)
        } else if optimal < 0 && ctx.bet < ctx.call_cost {
            PlayerAction::Fold
        } else {
            PlayerAction::Call
        }
    }
}

/// Mean score over the current hand and every completion of it to seven
/// cards drawn from the sample deck. Works on a detached copy of the hand.
pub fn expected_score(hand: &Hand) -> Option<f64> {
    let mut scratch = hand.clone();
    let mut total = scratch.score().ok()?.value();
    let mut samples = 1u32;

    let missing = MAX_SCORED_CARDS.saturating_sub(scratch.len());
    if missing > 0 {
        for combo in Combinations::new(SAMPLE_DECK.as_slice(), missing) {
            scratch.add_all(&combo);
            total += scratch.score().ok()?.value();
            samples += 1;
            scratch.remove_all(&combo).ok()?;
        }
    }
    Some(total / samples as f64)
}

impl DecisionPolicy for HoldemAI {
    fn decide(&self, ctx: &TurnContext<'_>, rng: &mut dyn RandomSource) -> PlayerAction {
        match ctx.street {
            Street::Preflop => self.preflop(ctx, rng),
            _ => self.postflop(ctx, rng),
        }
    }

    fn name(&self) -> &str {
        "holdem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_bands() {
        assert_eq!(score_percentile(134.0), 0.97);
        assert_eq!(score_percentile(80.0), 0.94);
        assert_eq!(score_percentile(65.0), 0.90);
        assert_eq!(score_percentile(50.0), 0.85);
        assert_eq!(score_percentile(35.0), 0.60);
        assert!((score_percentile(17.0) - 0.20).abs() < 1e-12);
        assert!((score_percentile(29.0) - 0.56).abs() < 1e-12);
        assert_eq!(score_percentile(14.5), 0.10);
        assert_eq!(score_percentile(0.2), 0.05);
    }

    #[test]
    fn full_hand_expects_its_own_score() {
        let mut h = Hand::new();
        for c in ["AS", "AD", "AC", "AH", "KS", "2D", "3C"] {
            h.add(c.parse().unwrap());
        }
        let expected = expected_score(&h).unwrap();
        assert_eq!(expected, h.score().unwrap().value());
    }

    #[test]
    fn lookahead_leaves_the_hand_untouched() {
        let mut h = Hand::new();
        for c in ["AS", "KD", "7C", "7H", "2D", "9S"] {
            h.add(c.parse().unwrap());
        }
        let before = h.clone();
        let avg = expected_score(&h).unwrap();
        assert_eq!(h, before);
        // a pair of sevens can only improve
        assert!(avg >= h.score().unwrap().value());
    }
}

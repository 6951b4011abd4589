//! Showdown settlement: ranks the seats and pays out the main and side pots.

use tracing::debug;

use crate::errors::GameError;
use crate::hand::HandScore;
use crate::logger::Payout;
use crate::player::Player;

/// Result of paying out a pot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// Seats of the last tier paid, i.e. the main pot winners
    pub winners: Vec<usize>,
    pub payouts: Vec<Payout>,
}

#[derive(Debug, Clone, Copy)]
struct Contender {
    seat: usize,
    folded: bool,
    score: HandScore,
}

impl Contender {
    fn same_tier(&self, other: &Contender) -> bool {
        self.folded == other.folded && self.score == other.score
    }
}

/// Distributes `pot` among `players` and credits their bankrolls.
///
/// Seats are ranked with live hands ahead of folded ones, then by score. The
/// best remaining tier takes the whole remaining pot, unless one of its
/// members is side-pot-only, in which case the tier is capped at
/// `stake * players_in_round * tier_size`. Ties split with ceiling division,
/// the last member of a tier taking whatever is left of the tier's share.
/// Tiers are paid until the pot is empty.
///
/// # Errors
///
/// [`GameError::InvalidHandSize`] if a hand cannot be scored, and
/// [`GameError::UndistributedPot`] if chips remain once every seat was paid.
pub fn resolve_pot(
    players: &mut [Player],
    players_in_round: usize,
    pot: u32,
) -> Result<Settlement, GameError> {
    let mut contenders = players
        .iter()
        .enumerate()
        .map(|(seat, p)| {
            Ok(Contender {
                seat,
                folded: p.has_folded(),
                score: p.hand().score()?,
            })
        })
        .collect::<Result<Vec<_>, GameError>>()?;
    // stable: equal seats keep table order
    contenders.sort_by(|a, b| (!b.folded, b.score).cmp(&(!a.folded, a.score)));

    let mut remaining = pot;
    let mut winners = Vec::new();
    let mut payouts = Vec::new();

    while remaining > 0 {
        let Some(best) = contenders.first().copied() else {
            return Err(GameError::UndistributedPot { remaining });
        };
        let tier_len = contenders
            .iter()
            .take_while(|c| c.same_tier(&best))
            .count();
        let tier: Vec<Contender> = contenders.drain(..tier_len).collect();

        let stake = tier
            .iter()
            .filter(|c| players[c.seat].side_pot_only())
            .map(|c| players[c.seat].bet())
            .min();
        let entitlement = match stake {
            Some(stake) => {
                let cap = stake as u64 * players_in_round as u64 * tier.len() as u64;
                cap.min(remaining as u64) as u32
            }
            None => remaining,
        };
        let side_pot = entitlement < remaining;

        let share = entitlement.div_ceil(tier.len() as u32);
        let mut left = entitlement;
        for c in &tier {
            let amount = share.min(left);
            left -= amount;
            players[c.seat].add_to_bankroll(amount);
            debug!(seat = c.seat, amount, side_pot, score = %c.score, "pot payout");
            payouts.push(Payout {
                seat: c.seat,
                amount,
                side_pot,
            });
        }

        remaining -= entitlement;
        winners = tier.iter().map(|c| c.seat).collect();
    }

    Ok(Settlement { winners, payouts })
}

use crate::hand::Hand;
use crate::logger::Street;
use crate::player::PlayerAction;
use crate::rng::RandomSource;

/// Everything a computer seat may look at when it is asked to act.
#[derive(Debug, Clone, Copy)]
pub struct TurnContext<'a> {
    pub street: Street,
    /// Opening hand plus the community cards revealed so far
    pub hand: &'a Hand,
    pub bankroll: u32,
    /// Chips this seat already put in this round
    pub bet: u32,
    pub call_cost: u32,
    pub can_raise: bool,
    pub pot: u32,
    /// Seats still holding cards, this one included
    pub players_not_folded: usize,
}

impl TurnContext<'_> {
    /// Largest raise on top of the call cost the seat can cover.
    pub fn affordable_raise(&self) -> i64 {
        self.bankroll as i64 + self.bet as i64 - self.call_cost as i64
    }
}

/// Decision-making for computer-controlled seats.
///
/// Policies are stateless with respect to the table: the same context and the
/// same random draws give the same action. Returned raises need not be
/// affordable; the engine downgrades them to calls.
pub trait DecisionPolicy {
    fn decide(&self, ctx: &TurnContext<'_>, rng: &mut dyn RandomSource) -> PlayerAction;

    fn name(&self) -> &str;
}

use tracing::{debug, info};

use crate::cards::{format_cards, Card};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::io::{InputSource, OutputSink};
use crate::logger::{format_round_id, ActionRecord, RoundRecord, Street};
use crate::player::{ActionTaken, Player, PlayerAction};
use crate::policy::{DecisionPolicy, TurnContext};
use crate::pot::{resolve_pot, Settlement};
use crate::rng::RandomSource;
use crate::rules::{can_raise, TableRules};

/// Smallest table a round can be dealt to (the two blinds).
pub const MIN_PLAYERS: usize = 2;

/// Per-round betting state. Rebuilt at the start of every round; only
/// bankrolls survive between rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub pot: u32,
    pub call_cost: u32,
    /// Seats that have not folded
    pub players_in_round: usize,
    pub players_all_in: usize,
    pub community: Vec<Card>,
    pub street: Street,
}

impl RoundState {
    fn new(players: usize, big_blind: u32) -> Self {
        Self {
            pot: 0,
            call_cost: big_blind,
            players_in_round: players,
            players_all_in: 0,
            community: Vec::with_capacity(5),
            street: Street::Preflop,
        }
    }
}

/// The engine's links to the outside: human input, narration, randomness
/// and the policy that drives computer seats.
pub struct Collaborators<'a> {
    pub input: &'a mut dyn InputSource,
    pub output: &'a mut dyn OutputSink,
    pub rng: &'a mut dyn RandomSource,
    pub policy: &'a dyn DecisionPolicy,
}

/// Drives one round at a time through blinds, the pre-flop betting, the
/// flop, turn and river streets, and the showdown.
///
/// Seats are visited in strict rotation starting at `first_player`. Each
/// street walks the table up to twice, so a raise made on the first pass is
/// answered on the second. The round ends early once a single seat holds
/// cards.
///
/// # Examples
///
/// ```
/// use holdem_engine::engine::{BettingEngine, Collaborators};
/// use holdem_engine::io::{NoHumanInput, NullOutput};
/// use holdem_engine::player::{Player, PlayerAction};
/// use holdem_engine::policy::{DecisionPolicy, TurnContext};
/// use holdem_engine::rng::{RandomSource, SeededRandom};
/// use holdem_engine::rules::TableRules;
///
/// struct AlwaysCall;
/// impl DecisionPolicy for AlwaysCall {
///     fn decide(&self, _: &TurnContext<'_>, _: &mut dyn RandomSource) -> PlayerAction {
///         PlayerAction::Call
///     }
///     fn name(&self) -> &str {
///         "always-call"
///     }
/// }
///
/// let (mut input, mut output, mut rng) = (NoHumanInput, NullOutput, SeededRandom::new(1));
/// let io = Collaborators { input: &mut input, output: &mut output, rng: &mut rng, policy: &AlwaysCall };
/// let mut engine = BettingEngine::new(TableRules::default(), io).unwrap();
/// let mut players = vec![Player::new("A", 100, false), Player::new("B", 100, false)];
/// let record = engine.play_round(&mut players, 0).unwrap();
/// assert_eq!(record.board.len(), 5);
/// assert_eq!(players[0].bankroll() + players[1].bankroll(), 200);
/// ```
pub struct BettingEngine<'a> {
    rules: TableRules,
    io: Collaborators<'a>,
    state: RoundState,
    deck: Deck,
    actions: Vec<ActionRecord>,
    round: u32,
    seed: Option<u64>,
}

impl<'a> BettingEngine<'a> {
    pub fn new(rules: TableRules, io: Collaborators<'a>) -> Result<Self, GameError> {
        rules.validate()?;
        Ok(Self {
            state: RoundState::new(0, rules.big_blind),
            deck: Deck::new(rules.num_decks),
            rules,
            io,
            actions: Vec::new(),
            round: 0,
            seed: None,
        })
    }

    /// Seed recorded in every [`RoundRecord`], for replaying a session.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    /// Lends the collaborators back to the session driver between rounds.
    pub fn io_mut(&mut self) -> &mut Collaborators<'a> {
        &mut self.io
    }

    /// Plays one full round. `first_player` is taken modulo the table size.
    pub fn play_round(
        &mut self,
        players: &mut [Player],
        first_player: usize,
    ) -> Result<RoundRecord, GameError> {
        self.start_round(players)?;
        let first = first_player % players.len();
        info!(
            round = self.round,
            players = players.len(),
            first_player = first,
            "round started"
        );

        self.betting_pass(players, first, Street::Preflop)?;
        for (street, reveal) in Street::POSTFLOP.into_iter().zip(self.rules.community_cards) {
            if self.state.players_in_round == 1 {
                break;
            }
            self.deal_street(players, street, reveal)?;
            self.betting_pass(players, first, street)?;
        }

        let settlement = self.showdown(players)?;
        Ok(RoundRecord {
            round_id: format_round_id(self.round),
            seed: self.seed,
            actions: std::mem::take(&mut self.actions),
            board: self.state.community.clone(),
            pot: self.state.pot,
            payouts: settlement.payouts,
            winners: settlement.winners,
        })
    }

    /// Resets seats and round state, shuffles a fresh shoe and deals two
    /// cards to every seat.
    pub fn start_round(&mut self, players: &mut [Player]) -> Result<(), GameError> {
        if players.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers {
                minimum: MIN_PLAYERS,
                actual: players.len(),
            });
        }
        self.round += 1;
        self.state = RoundState::new(players.len(), self.rules.big_blind);
        self.actions.clear();
        self.deck = Deck::new(self.rules.num_decks);
        self.deck.shuffle(&mut *self.io.rng);

        self.say("Dealing cards...");
        for p in players.iter_mut() {
            p.reset();
            for _ in 0..2 {
                let c = self.deck.deal()?;
                p.hand_mut().add(c);
            }
        }
        if let Some(human) = players.iter().find(|p| p.is_human()) {
            let line = format!("Your starting hand is {}", format_cards(human.hand().cards()));
            self.say(&line);
        }
        Ok(())
    }

    /// Burns, then reveals `reveal` community cards into every hand.
    pub fn deal_street(
        &mut self,
        players: &mut [Player],
        street: Street,
        reveal: usize,
    ) -> Result<(), GameError> {
        self.state.street = street;
        self.say("Time to reveal new cards!");
        self.say("Burning one card...");
        self.say(&format!(
            "Now, adding {} new card(s) to the community...",
            reveal
        ));
        self.deck.burn(self.rules.burn_per_street)?;
        for _ in 0..reveal {
            let c = self.deck.deal()?;
            self.state.community.push(c);
            for p in players.iter_mut() {
                p.hand_mut().add(c);
            }
        }
        debug!(?street, board = %format_cards(&self.state.community), "street dealt");
        let line = format!(
            "The community is now comprised of: {}",
            format_cards(&self.state.community)
        );
        self.say(&line);
        Ok(())
    }

    /// Walks the table for one street. Pre-flop, the first two seats of the
    /// rotation post the blinds instead of deciding; afterwards betting
    /// starts at the third seat and the blinds act last.
    pub fn betting_pass(
        &mut self,
        players: &mut [Player],
        first_player: usize,
        street: Street,
    ) -> Result<(), GameError> {
        let n = players.len();
        self.state.street = street;
        let start = if street == Street::Preflop { 0 } else { 2 };

        for i in start..n * 2 + 1 {
            if self.state.players_in_round == 1 {
                break;
            }
            let seat = (i + first_player) % n;

            if street == Street::Preflop {
                if i < n {
                    let line = format!(
                        "{} has entered the round with a bankroll of ${}",
                        players[seat].name(),
                        players[seat].bankroll()
                    );
                    self.say(&line);
                }
                if i == 0 {
                    self.post_blind(&mut players[seat], seat, self.rules.small_blind, "small");
                    continue;
                }
                if i == 1 {
                    self.post_blind(&mut players[seat], seat, self.rules.big_blind, "big");
                    continue;
                }
            }

            let raise_open = can_raise(
                i,
                n,
                self.state.players_in_round,
                self.state.players_all_in,
            );
            if players[seat].cannot_play(self.state.call_cost, raise_open) {
                continue;
            }

            let action = self.decide(&players[seat], street, raise_open);
            self.apply(&mut players[seat], seat, street, action);
        }
        Ok(())
    }

    /// Ranks every hand and pays out the pot.
    pub fn showdown(&mut self, players: &mut [Player]) -> Result<Settlement, GameError> {
        self.say("Betting has concluded. Everyone must now show their hands!");
        for p in players.iter() {
            let line = p.showdown_line();
            self.say(&line);
        }

        let settlement = resolve_pot(players, self.state.players_in_round, self.state.pot)?;
        for payout in settlement.payouts.iter().filter(|p| p.side_pot) {
            let line = format!(
                "{} wins ${} in a side pot!",
                players[payout.seat].name(),
                payout.amount
            );
            self.say(&line);
        }
        let names: Vec<&str> = settlement
            .winners
            .iter()
            .map(|&s| players[s].name())
            .collect();
        self.say(&format!(
            "The main pot winner(s) of this round are: {}!",
            names.join(", ")
        ));
        info!(
            round = self.round,
            pot = self.state.pot,
            winners = ?settlement.winners,
            "round settled"
        );
        Ok(settlement)
    }

    fn post_blind(&mut self, player: &mut Player, seat: usize, amount: u32, which: &str) {
        let line = format!("They're {} blind and ante {} chips", which, amount);
        self.say(&line);
        let paid = player.sub_from_bankroll(amount);
        self.state.pot += paid;
        if player.is_bankrupt() {
            self.state.players_all_in += 1;
        }
        self.record(seat, Street::Preflop, ActionTaken::Call { amount: paid });
    }

    fn decide(&mut self, player: &Player, street: Street, raise_open: bool) -> PlayerAction {
        if player.is_human() {
            return human_decision(
                player,
                self.state.call_cost,
                raise_open,
                &mut *self.io.input,
                &mut *self.io.output,
            );
        }
        let ctx = TurnContext {
            street,
            hand: player.hand(),
            bankroll: player.bankroll(),
            bet: player.bet(),
            call_cost: self.state.call_cost,
            can_raise: raise_open,
            pot: self.state.pot,
            players_not_folded: self.state.players_in_round,
        };
        let action = self.io.policy.decide(&ctx, &mut *self.io.rng);
        // a raise the policy was not allowed to make is treated as a call
        match action {
            PlayerAction::Raise(_) if !raise_open => PlayerAction::Call,
            other => other,
        }
    }

    fn apply(&mut self, player: &mut Player, seat: usize, street: Street, action: PlayerAction) {
        let before = player.bet();
        let taken = match action {
            PlayerAction::Fold => player.fold(),
            PlayerAction::Call => player.call(self.state.call_cost),
            PlayerAction::Raise(by) => {
                let (cost, taken) = player.raise(self.state.call_cost, by);
                self.state.call_cost = cost;
                taken
            }
        };
        let line = taken.describe(player.name());
        self.say(&line);

        if player.has_folded() {
            self.state.players_in_round -= 1;
        } else {
            self.state.pot += player.bet() - before;
        }
        if player.is_bankrupt() {
            self.state.players_all_in += 1;
        }
        self.record(seat, street, taken);
    }

    fn record(&mut self, seat: usize, street: Street, action: ActionTaken) {
        debug!(seat, ?street, ?action, pot = self.state.pot, "seat acted");
        self.actions.push(ActionRecord {
            seat,
            street,
            action,
            pot: self.state.pot,
        });
    }

    fn say(&mut self, text: &str) {
        self.io.output.display(text);
    }
}

/// The human seat's turn: optional raise, then call or fold if behind.
fn human_decision(
    player: &Player,
    call_cost: u32,
    raise_open: bool,
    input: &mut dyn InputSource,
    output: &mut dyn OutputSink,
) -> PlayerAction {
    let max_raise = player.max_raise(call_cost);
    if raise_open && max_raise > 0 {
        output.display(&format!(
            "{}, your hand contains {}, your bankroll is ${}, and you can raise up to ${}",
            player.name(),
            player.hand(),
            player.bankroll(),
            max_raise
        ));
        output.display("Would you like to raise? If so, type how much. If not, type 0: ");
        let raise = input.prompt_integer(max_raise as u32);
        if raise > 0 {
            return PlayerAction::Raise(raise);
        }
    } else {
        output.display(&format!(
            "{}, your hand contains {} and your bankroll is ${}",
            player.name(),
            player.hand(),
            player.bankroll()
        ));
    }

    if call_cost > player.bet() {
        output.display(&format!(
            "You need to put in {} chips to call",
            call_cost - player.bet()
        ));
        output.display("Would you like to call or fold? (C/F) ");
        if input.prompt_choice("C", "F").eq_ignore_ascii_case("C") {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        }
    } else {
        PlayerAction::Call
    }
}

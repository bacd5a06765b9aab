//! Game session: the rules, the current snapshot, and the turn timer.
//!
//! The session is what a presentation layer talks to. Each move stops the
//! running countdown and applies the transition as one step, then arms the
//! countdown for the phase the new snapshot is in. A failed move leaves
//! both the snapshot and the countdown exactly as they were.
//!
//! Randomness comes from one seed split into independent streams for
//! setup, dice, and forced-move selection, so a session replays exactly.

use im::Vector;
use tracing::{debug, error, info, warn};

use super::policy::{MovePolicy, UniformRandom};
use crate::core::{
    Action, ActionRecord, GameError, GamePhase, GameRng, GameState, Operation, PlayerId,
    PreconditionError, RulesConfig,
};
use crate::rules::{LegalOperations, RulesEngine, TargetRules};
use crate::timer::{Expiry, TimerSlot, TimerTicket, TurnTimer};

/// What one second of wall time did to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionTick {
    /// No countdown is running.
    Idle,
    /// A countdown is running with `remaining` seconds left.
    Counting { slot: TimerSlot, remaining: u32 },
    /// The countdown ran out and this move was made for the player.
    Forced(ActionRecord),
}

/// Per-session random streams.
#[derive(Clone, Debug)]
struct Streams {
    setup: GameRng,
    dice: GameRng,
    policy: GameRng,
}

impl Streams {
    fn from_root(root: &GameRng) -> Self {
        Self {
            setup: root.for_context("setup"),
            dice: root.for_context("dice"),
            policy: root.for_context("policy"),
        }
    }
}

/// A running game.
#[derive(Debug)]
pub struct GameSession<P = UniformRandom> {
    rules: TargetRules,
    policy: P,
    state: GameState,
    names: Vec<String>,
    root: GameRng,
    streams: Streams,
    timer: TurnTimer,
    armed: Option<TimerTicket>,
    history: Vector<ActionRecord>,
    turn: u32,
}

impl GameSession<UniformRandom> {
    /// Start a session whose forced moves are picked uniformly at random.
    pub fn new(
        config: RulesConfig,
        player_count: usize,
        names: &[&str],
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::with_policy(config, player_count, names, seed, UniformRandom)
    }
}

impl<P: MovePolicy<TargetRules>> GameSession<P> {
    /// Start a session with a custom forced-move policy.
    pub fn with_policy(
        config: RulesConfig,
        player_count: usize,
        names: &[&str],
        seed: u64,
        policy: P,
    ) -> Result<Self, GameError> {
        let rules = TargetRules::new(config)?;
        let root = GameRng::new(seed);
        let mut streams = Streams::from_root(&root);
        let state = rules.initialize_game(player_count, names, &mut streams.setup)?;
        info!(seed = root.seed(), player_count, target_number = state.target_number, "session started");

        Ok(Self {
            rules,
            policy,
            names: state.players.iter().map(|p| p.name.clone()).collect(),
            state,
            root,
            streams,
            timer: TurnTimer::new(),
            armed: None,
            history: Vector::new(),
            turn: 1,
        })
    }

    /// Roll the dice for the active player.
    pub fn roll_dice(&mut self) -> Result<&GameState, GameError> {
        self.perform(Action::Roll, false)?;
        Ok(&self.state)
    }

    /// Combine the dice with `op`.
    pub fn choose_dice_operation(&mut self, op: Operation) -> Result<&GameState, GameError> {
        self.perform(Action::Dice(op), false)?;
        Ok(&self.state)
    }

    /// Combine the active player's number with the dice result using `op`.
    pub fn choose_final_operation(&mut self, op: Operation) -> Result<&GameState, GameError> {
        self.perform(Action::Final(op), false)?;
        Ok(&self.state)
    }

    /// Advance the turn timer by one second.
    ///
    /// When the countdown runs out, a legal move is chosen by the policy
    /// and applied exactly as a player's choice would be.
    pub fn tick(&mut self) -> Result<SessionTick, GameError> {
        match self.timer.tick() {
            Some(expiry) => self.resolve_expiry(expiry),
            None => Ok(match (self.timer.slot(), self.timer.remaining()) {
                (Some(slot), Some(remaining)) => SessionTick::Counting { slot, remaining },
                _ => SessionTick::Idle,
            }),
        }
    }

    /// Start a fresh game with the same players and rules.
    ///
    /// Players are re-created at the starting number, a new target is
    /// drawn, and the history is cleared.
    pub fn rematch(&mut self) -> Result<&GameState, GameError> {
        let root = self.root.fork();
        let mut streams = Streams::from_root(&root);
        let names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        let state = self
            .rules
            .initialize_game(self.state.player_count(), &names, &mut streams.setup)?;
        info!(seed = root.seed(), target_number = state.target_number, "rematch started");

        self.timer.stop();
        self.armed = None;
        self.root = root;
        self.streams = streams;
        self.state = state;
        self.history = Vector::new();
        self.turn = 1;
        Ok(&self.state)
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Rules in force.
    #[must_use]
    pub fn rules(&self) -> &TargetRules {
        &self.rules
    }

    /// Every move made this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Current turn number (starts at 1).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The winner, once someone reaches the target.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    /// Seconds left to choose, if a countdown is running.
    #[must_use]
    pub fn timer_remaining(&self) -> Option<u32> {
        self.timer.remaining()
    }

    /// Whether `op` is selectable in the current phase.
    #[must_use]
    pub fn can_use_operation(&self, op: Operation) -> bool {
        !self.state.is_over() && self.rules.can_use_operation(&self.state, op, self.state.game_phase)
    }

    /// Operations selectable in the current phase.
    #[must_use]
    pub fn legal_operations(&self) -> LegalOperations {
        if self.state.is_over() {
            return LegalOperations::new();
        }
        self.rules.legal_operations(&self.state)
    }

    fn perform(&mut self, action: Action, forced: bool) -> Result<ActionRecord, GameError> {
        if self.state.is_over() {
            warn!(%action, "move after game over");
            return Err(PreconditionError::GameOver.into());
        }

        let player = self.state.current_player().id;
        let next = self
            .rules
            .apply_action(&self.state, action, &mut self.streams.dice)?;

        self.timer.stop();
        self.armed = None;

        let record = ActionRecord::new(player, action, self.turn, forced);
        debug!(%player, %action, forced, turn = self.turn, phase = %next.game_phase, "move applied");
        self.history.push_back(record.clone());

        if matches!(action, Action::Final(_)) && next.winner.is_none() {
            self.turn += 1;
        }
        self.state = next;
        self.arm_timer();

        Ok(record)
    }

    fn arm_timer(&mut self) {
        if self.state.is_over() {
            return;
        }
        if let Some(slot) = TimerSlot::for_phase(self.state.game_phase) {
            let seconds = slot.seconds(self.rules.config());
            self.armed = Some(self.timer.start(slot, seconds));
        }
    }

    fn resolve_expiry(&mut self, expiry: Expiry) -> Result<SessionTick, GameError> {
        let current = self.armed == Some(expiry.ticket)
            && expiry.slot.phase() == self.state.game_phase
            && !self.state.is_over();
        if !current {
            debug!(slot = ?expiry.slot, phase = %self.state.game_phase, "stale expiry ignored");
            return Ok(SessionTick::Idle);
        }
        self.armed = None;

        let Some(action) = self
            .policy
            .choose_action(&self.rules, &self.state, &mut self.streams.policy)
        else {
            warn!(phase = %self.state.game_phase, "countdown expired with no legal move");
            return Ok(SessionTick::Idle);
        };

        match self.perform(action, true) {
            Ok(record) => {
                info!(player = %record.player, %action, "move forced on timeout");
                Ok(SessionTick::Forced(record))
            }
            Err(source) => {
                error!(%action, error = %source, "forced move rejected");
                Err(GameError::ForcedMoveRejected {
                    action,
                    source: Box::new(source),
                })
            }
        }
    }
}

impl<P> GameSession<P> {
    /// Phase the current snapshot is in.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.state.game_phase
    }
}

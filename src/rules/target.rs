//! Reach-the-target rules: bootstrap and the turn state machine.
//!
//! Each turn moves through three phases:
//!
//! ```text
//! roll --roll_dice--> dice-operation --apply_dice_operation--> final-operation
//!   ^                                                               |
//!   +--------------------------apply_final_move--------------------+
//! ```
//!
//! A final move that lands exactly on the target sets the winner and keeps
//! the turn with that player; any other final move passes the turn on.
//! Overshooting the target is not special: play continues.

use im::Vector;
use tracing::{debug, info, warn};

use super::engine::{GameResult, LegalActions, RulesEngine};
use super::operation::{self, LegalOperations};
use crate::core::{
    Action, DiceRoll, GameError, GamePhase, GameRng, GameState, Operation, Player, PlayerId,
    PreconditionError, RulesConfig,
};

/// The standard rules, parameterised by a `RulesConfig`.
#[derive(Clone, Debug, Default)]
pub struct TargetRules {
    config: RulesConfig,
}

impl TargetRules {
    /// Create rules from a configuration, validating it first.
    pub fn new(config: RulesConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build the opening snapshot of a session.
    ///
    /// Draws the target, seats `player_count` players at the starting
    /// number with colors by seat, and picks the first player at random.
    /// Names are trimmed; a missing or blank name becomes "Player N".
    pub fn initialize_game(
        &self,
        player_count: usize,
        names: &[&str],
        rng: &mut GameRng,
    ) -> Result<GameState, GameError> {
        self.config.check_player_count(player_count)?;

        let (low, high) = self.config.target_range;
        let target_number = rng.target_number(low, high);
        let current_player_index = rng.pick_index(player_count);

        let players: Vector<Player> = PlayerId::all(player_count)
            .zip(&self.config.palette)
            .enumerate()
            .map(|(seat, (id, &color))| {
                Player::new(id, names.get(seat).copied(), self.config.starting_number, color)
            })
            .collect();

        info!(
            player_count,
            target_number,
            first_player = %players[current_player_index].id,
            "game initialized"
        );

        Ok(GameState::new(players, target_number, current_player_index))
    }

    /// Roll both dice and move to the dice-operation phase.
    pub fn roll_dice(&self, state: &GameState, rng: &mut GameRng) -> Result<GameState, GameError> {
        if state.game_phase != GamePhase::Roll {
            return Err(rejected(state, PreconditionError::DiceAlreadyRolled));
        }

        let dice = DiceRoll::new(rng.roll_die(), rng.roll_die());
        debug!(player = %state.current_player().id, first = dice.first, second = dice.second, "dice rolled");

        Ok(GameState {
            dice_results: Some(dice),
            game_phase: GamePhase::DiceOperation,
            ..state.clone()
        })
    }

    /// Combine die 1 with die 2 and move to the final-operation phase.
    pub fn apply_dice_operation(&self, state: &GameState, op: Operation) -> Result<GameState, GameError> {
        let dice = match (state.game_phase, state.dice_results) {
            (GamePhase::DiceOperation, Some(dice)) => dice,
            (GamePhase::FinalOperation, _) => {
                return Err(rejected(state, PreconditionError::DiceOperationAlreadyApplied))
            }
            _ => return Err(rejected(state, PreconditionError::NoDiceRolled)),
        };

        let (first, second) = dice.operands();
        let result = operation::apply(first, second, op).map_err(|e| {
            debug!(%op, first, second, error = %e, "dice operation rejected");
            GameError::from(e)
        })?;
        debug!(%op, first, second, result, "dice operation applied");

        Ok(GameState {
            dice_calculation_result: Some(result),
            game_phase: GamePhase::FinalOperation,
            ..state.clone()
        })
    }

    /// Combine the active player's number with the dice result.
    ///
    /// Landing on the target sets the winner and keeps the turn; anything
    /// else passes the turn to the next seat. Either way the turn's dice
    /// are cleared and the phase returns to `roll`.
    pub fn apply_final_move(&self, state: &GameState, op: Operation) -> Result<GameState, GameError> {
        let dice_result = match (state.game_phase, state.dice_calculation_result) {
            (GamePhase::FinalOperation, Some(result)) => result,
            _ => return Err(rejected(state, PreconditionError::NoDiceOperation)),
        };

        let player = state.current_player();
        let new_number = operation::apply(player.current_number, dice_result, op).map_err(|e| {
            debug!(%op, number = player.current_number, dice_result, error = %e, "final move rejected");
            GameError::from(e)
        })?;

        let mut players = state.players.clone();
        players[state.current_player_index] = player.with_number(new_number);

        let reached = new_number == state.target_number;
        let (winner, current_player_index) = if reached {
            info!(player = %player.id, name = %player.name, target_number = state.target_number, "target reached");
            (Some(player.id), state.current_player_index)
        } else {
            debug!(player = %player.id, %op, new_number, "final move applied");
            (None, state.next_player_index())
        };

        Ok(GameState {
            players,
            target_number: state.target_number,
            current_player_index,
            dice_results: None,
            dice_calculation_result: None,
            winner,
            game_phase: GamePhase::Roll,
        })
    }

    /// Whether `op` may be chosen in `phase` given the current snapshot.
    ///
    /// False when the snapshot is not in `phase`, and always false for the
    /// roll phase, which takes no operation.
    #[must_use]
    pub fn can_use_operation(&self, state: &GameState, op: Operation, phase: GamePhase) -> bool {
        state.game_phase == phase
            && operands(state).is_some_and(|(a, b)| operation::is_legal(a, b, op))
    }

    /// Legal operations for the phase the snapshot is in.
    #[must_use]
    pub fn legal_operations(&self, state: &GameState) -> LegalOperations {
        operands(state)
            .map(|(a, b)| operation::legal_operations(a, b))
            .unwrap_or_default()
    }
}

impl RulesEngine for TargetRules {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> LegalActions {
        if state.is_over() {
            return LegalActions::new();
        }

        match state.game_phase {
            GamePhase::Roll => LegalActions::from_slice(&[Action::Roll]),
            GamePhase::DiceOperation => self.legal_operations(state).into_iter().map(Action::Dice).collect(),
            GamePhase::FinalOperation => self.legal_operations(state).into_iter().map(Action::Final).collect(),
        }
    }

    fn apply_action(
        &self,
        state: &GameState,
        action: Action,
        rng: &mut GameRng,
    ) -> Result<GameState, GameError> {
        match action {
            Action::Roll => self.roll_dice(state, rng),
            Action::Dice(op) => self.apply_dice_operation(state, op),
            Action::Final(op) => self.apply_final_move(state, op),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner.map(GameResult::Winner)
    }
}

/// Left and right operands of the operation the current phase asks for.
fn operands(state: &GameState) -> Option<(i64, i64)> {
    match state.game_phase {
        GamePhase::Roll => None,
        GamePhase::DiceOperation => state.dice_results.map(DiceRoll::operands),
        GamePhase::FinalOperation => state
            .dice_calculation_result
            .map(|result| (state.current_player().current_number, result)),
    }
}

fn rejected(state: &GameState, error: PreconditionError) -> GameError {
    warn!(phase = %state.game_phase, %error, "transition called in wrong phase");
    error.into()
}

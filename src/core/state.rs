//! Game state snapshot.
//!
//! ## GameState
//!
//! The single source of truth for a session:
//! - Players (seat order = turn order)
//! - Target number (fixed for the session)
//! - Active player index
//! - Dice and dice-operation result of the turn in progress
//! - Winner, once someone lands on the target
//! - Phase
//!
//! Transitions never mutate a snapshot; they build a new one. `players`
//! is an `im::Vector` so a new snapshot shares every untouched player.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};

/// Stage of the turn in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GamePhase {
    /// Waiting for the active player to roll.
    #[default]
    Roll,
    /// Dice are on the table; waiting for the dice operation.
    DiceOperation,
    /// Dice result known; waiting for the final operation.
    FinalOperation,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Roll => "roll",
            GamePhase::DiceOperation => "dice-operation",
            GamePhase::FinalOperation => "final-operation",
        };
        write!(f, "{name}")
    }
}

/// An ordered pair of die values, each in `[1, 6]`.
///
/// Order matters for `-` and `/`: die 1 is the left operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub first: u8,
    pub second: u8,
}

impl DiceRoll {
    /// Create a roll from two die values.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Both values as operands.
    #[must_use]
    pub fn operands(self) -> (i64, i64) {
        (i64::from(self.first), i64::from(self.second))
    }
}

/// Complete, immutable game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seats in turn order.
    pub players: Vector<Player>,

    /// Number every player is trying to reach.
    pub target_number: i64,

    /// Index into `players` of the player to act.
    pub current_player_index: usize,

    /// Dice of the turn in progress.
    pub dice_results: Option<DiceRoll>,

    /// Result of the dice operation of the turn in progress.
    pub dice_calculation_result: Option<i64>,

    /// Player who reached the target.
    pub winner: Option<PlayerId>,

    /// Stage of the turn in progress.
    pub game_phase: GamePhase,
}

impl GameState {
    /// Create a fresh snapshot at the start of a turn.
    #[must_use]
    pub fn new(players: Vector<Player>, target_number: i64, current_player_index: usize) -> Self {
        debug_assert!(current_player_index < players.len());

        Self {
            players,
            target_number,
            current_player_index,
            dice_results: None,
            dice_calculation_result: None,
            winner: None,
            game_phase: GamePhase::Roll,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        id.seat()
            .and_then(|seat| self.players.get(seat))
            .filter(|p| p.id == id)
    }

    /// The winning player's record, if the game is over.
    #[must_use]
    pub fn winning_player(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    /// Whether someone has reached the target.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Index of the player after the current one.
    #[must_use]
    pub fn next_player_index(&self) -> usize {
        (self.current_player_index + 1) % self.players.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PlayerColor;

    fn players(count: usize) -> Vector<Player> {
        PlayerId::all(count)
            .zip(PlayerColor::DEFAULT_PALETTE)
            .map(|(id, color)| Player::new(id, None, 5, color))
            .collect()
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(players(3), 120, 1);

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.game_phase, GamePhase::Roll);
        assert_eq!(state.current_player().id, PlayerId::new(2));
        assert!(state.dice_results.is_none());
        assert!(state.dice_calculation_result.is_none());
        assert!(!state.is_over());
    }

    #[test]
    fn test_next_player_wraps() {
        let state = GameState::new(players(3), 120, 2);
        assert_eq!(state.next_player_index(), 0);

        let state = GameState::new(players(3), 120, 0);
        assert_eq!(state.next_player_index(), 1);
    }

    #[test]
    fn test_player_lookup() {
        let state = GameState::new(players(3), 120, 0);

        assert_eq!(state.player(PlayerId::new(3)).map(|p| p.name.as_str()), Some("Player 3"));
        assert!(state.player(PlayerId::new(0)).is_none());
        assert!(state.player(PlayerId::new(4)).is_none());
    }

    #[test]
    fn test_winning_player() {
        let mut state = GameState::new(players(2), 120, 0);
        assert!(state.winning_player().is_none());

        state.winner = Some(PlayerId::new(2));
        assert_eq!(state.winning_player().map(|p| p.name.as_str()), Some("Player 2"));
        assert!(state.is_over());
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(GamePhase::Roll.to_string(), "roll");
        assert_eq!(GamePhase::DiceOperation.to_string(), "dice-operation");
        assert_eq!(serde_json::to_string(&GamePhase::FinalOperation).unwrap(), "\"final-operation\"");
    }

    #[test]
    fn test_dice_operands_keep_order() {
        assert_eq!(DiceRoll::new(6, 2).operands(), (6, 2));
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::new(players(4), 321, 3);
        state.dice_results = Some(DiceRoll::new(4, 4));
        state.dice_calculation_result = Some(16);
        state.game_phase = GamePhase::FinalOperation;

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}

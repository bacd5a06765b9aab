//! Rules engine trait.
//!
//! The session drives play through this trait:
//! - What moves are legal right now
//! - How a move produces the next snapshot
//! - Whether the game has ended

use smallvec::SmallVec;

use crate::core::{Action, GameError, GameRng, GameState, PlayerId, RulesConfig};

/// Legal moves for the current phase. Never more than four.
pub type LegalActions = SmallVec<[Action; 4]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The player who landed exactly on the target.
    Winner(PlayerId),
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty once the game is over
/// - `apply_action`: takes a snapshot and returns a new one; on error the
///   input snapshot is the caller's state, untouched
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Every move the active player may make now.
    fn legal_actions(&self, state: &GameState) -> LegalActions;

    /// Apply a move, producing the next snapshot.
    fn apply_action(
        &self,
        state: &GameState,
        action: Action,
        rng: &mut GameRng,
    ) -> Result<GameState, GameError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Check whether a single move is currently legal.
    fn is_legal(&self, state: &GameState, action: Action) -> bool {
        self.legal_actions(state).contains(&action)
    }
}

//! Forced-move policy.
//!
//! When the turn timer runs out, a `MovePolicy` picks the move made on the
//! player's behalf. It only ever sees moves the rules already report as
//! legal.

use crate::core::{Action, GameRng, GameState};
use crate::rules::RulesEngine;

/// Chooses a move for a player who ran out of time.
pub trait MovePolicy<E: RulesEngine> {
    /// Choose a legal move.
    ///
    /// Returns `None` if no legal moves exist.
    fn choose_action(&self, engine: &E, state: &GameState, rng: &mut GameRng) -> Option<Action>;
}

/// Picks uniformly among the legal moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl<E: RulesEngine> MovePolicy<E> for UniformRandom {
    fn choose_action(&self, engine: &E, state: &GameState, rng: &mut GameRng) -> Option<Action> {
        let actions = engine.legal_actions(state);
        rng.choose(&actions).copied()
    }
}

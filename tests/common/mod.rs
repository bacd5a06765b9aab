//! Shared helpers for integration tests.

#![allow(dead_code)]

use dice_target::core::{DiceRoll, GamePhase, GameState, Player, PlayerColor, PlayerId};

/// Install a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A roll-phase snapshot with the given running numbers, seat 0 to act.
pub fn table(numbers: &[i64], target: i64) -> GameState {
    let players = PlayerId::all(numbers.len())
        .zip(numbers)
        .zip(PlayerColor::DEFAULT_PALETTE)
        .map(|((id, &number), color)| Player::new(id, None, number, color))
        .collect();
    GameState::new(players, target, 0)
}

/// The same snapshot with dice on the table.
pub fn with_dice(state: &GameState, first: u8, second: u8) -> GameState {
    GameState {
        dice_results: Some(DiceRoll::new(first, second)),
        game_phase: GamePhase::DiceOperation,
        ..state.clone()
    }
}

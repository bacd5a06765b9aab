//! Error taxonomy for the engine.
//!
//! Every transition is all-or-nothing: when one of these errors is
//! returned the caller still holds the previous, valid `GameState`.

use thiserror::Error;

use super::action::{Action, Operation};

/// Top-level engine error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The chosen operation cannot be applied to its operands.
    #[error("illegal operation: {0}")]
    IllegalOperation(#[from] IllegalOperation),

    /// A transition was invoked in the wrong phase.
    #[error("precondition failed: {0}")]
    Precondition(#[from] PreconditionError),

    /// Session creation was given invalid settings.
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The turn timer picked a move the legality predicate approved but the
    /// engine rejected. Indicates the predicate and `apply` disagree.
    #[error("forced move `{action}` was rejected: {source}")]
    ForcedMoveRejected {
        action: Action,
        #[source]
        source: Box<GameError>,
    },
}

/// Why an operation could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalOperation {
    #[error("division by zero")]
    DivisionByZero,

    #[error("non-integer division not allowed ({dividend} / {divisor})")]
    NonIntegerDivision { dividend: i64, divisor: i64 },

    #[error("{lhs} {operation} {rhs} overflows")]
    Overflow {
        lhs: i64,
        rhs: i64,
        operation: Operation,
    },
}

/// A transition was called in a phase that does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("dice already rolled this turn")]
    DiceAlreadyRolled,

    #[error("no dice rolled yet")]
    NoDiceRolled,

    #[error("dice operation already applied this turn")]
    DiceOperationAlreadyApplied,

    #[error("no dice operation performed yet")]
    NoDiceOperation,

    #[error("game is over")]
    GameOver,
}

/// Invalid settings for a new session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("player count {count} outside [{min}, {max}]")]
    PlayerCount { count: usize, min: usize, max: usize },

    #[error("player bounds [{min}, {max}] must be non-empty within [1, 255]")]
    PlayerBounds { min: usize, max: usize },

    #[error("target range [{low}, {high}] is empty")]
    TargetRange { low: i64, high: i64 },

    #[error("palette has {colors} colors but up to {players} players")]
    Palette { colors: usize, players: usize },

    #[error("could not parse configuration: {0}")]
    Parse(String),
}

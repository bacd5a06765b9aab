//! Action representation: operations and the moves built from them.
//!
//! A turn is made of three moves:
//! - `Roll`: throw both dice
//! - `Dice(op)`: combine die 1 with die 2
//! - `Final(op)`: combine the player's number with the dice result
//!
//! The arithmetic itself lives in `rules::operation`; this module only
//! names the choices.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// One of the four arithmetic operations a player can choose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation, in menu order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The symbol shown on the operation button.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single move within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll both dice.
    Roll,
    /// Combine the two dice with an operation.
    Dice(Operation),
    /// Combine the player's number with the dice result.
    Final(Operation),
}

impl Action {
    /// The operation carried by this action, if any.
    #[must_use]
    pub fn operation(self) -> Option<Operation> {
        match self {
            Action::Roll => None,
            Action::Dice(op) | Action::Final(op) => Some(op),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Roll => write!(f, "roll"),
            Action::Dice(op) => write!(f, "dice {op}"),
            Action::Final(op) => write!(f, "final {op}"),
        }
    }
}

/// A recorded move with metadata for history tracking.
///
/// `forced` marks moves the turn timer made on the player's behalf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who made the move.
    pub player: PlayerId,

    /// The move made.
    pub action: Action,

    /// Turn number when the move was made (starts at 1).
    pub turn: u32,

    /// Whether the turn timer chose this move.
    pub forced: bool,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, forced: bool) -> Self {
        Self {
            player,
            action,
            turn,
            forced,
        }
    }
}

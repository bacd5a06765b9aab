//! Game rules.
//!
//! - `operation`: the four arithmetic operations and their legality
//! - `engine`: the `RulesEngine` trait the session drives
//! - `target`: the reach-the-target turn state machine

pub mod engine;
pub mod operation;
pub mod target;

pub use engine::{GameResult, LegalActions, RulesEngine};
pub use operation::{apply, can_divide, is_legal, legal_operations, LegalOperations};
pub use target::TargetRules;

//! Core engine types: players, state, actions, errors, RNG, configuration.
//!
//! Everything here is plain data plus the randomness source. The rules
//! that move between states live in `rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, Operation};
pub use config::{RulesConfig, DEFAULT_TURN_SECONDS, STARTING_NUMBER, TARGET_MAX, TARGET_MIN};
pub use error::{ConfigurationError, GameError, IllegalOperation, PreconditionError};
pub use player::{Player, PlayerColor, PlayerId, MAX_SEATS};
pub use rng::{GameRng, DIE_FACES};
pub use state::{DiceRoll, GamePhase, GameState};

//! # dice-target
//!
//! Rules engine and turn state machine for a reach-the-target dice game.
//!
//! Every player starts at 5. On a turn the player rolls two dice, combines
//! them with `+ - * /`, then combines that result with their own number.
//! The first player to land exactly on the target (drawn from `[50, 500]`)
//! wins.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: every transition takes a `GameState`
//!    and returns a new one. A failed transition leaves the caller's
//!    snapshot as it was.
//!
//! 2. **Injected randomness**: dice, targets, and forced moves draw from a
//!    seeded `GameRng`, so any session can be replayed.
//!
//! 3. **Cooperative timer**: the turn timer counts when the host ticks it.
//!    There are no threads.
//!
//! ## Modules
//!
//! - `core`: players, state, actions, errors, RNG, configuration
//! - `rules`: arithmetic operations and the turn state machine
//! - `timer`: the per-decision countdown
//! - `session`: a running game with timer-forced moves and history
//!
//! ## Example
//!
//! ```
//! use dice_target::{GameSession, GamePhase, Operation, RulesConfig};
//!
//! let mut session = GameSession::new(RulesConfig::default(), 2, &["Ada", "Linus"], 42)?;
//!
//! session.roll_dice()?;
//! session.choose_dice_operation(Operation::Add)?;
//! session.choose_final_operation(Operation::Multiply)?;
//!
//! assert_eq!(session.phase(), GamePhase::Roll);
//! # Ok::<(), dice_target::GameError>(())
//! ```

pub mod core;
pub mod rules;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigurationError, DiceRoll, GameError, GamePhase, GameRng, GameState,
    IllegalOperation, Operation, Player, PlayerColor, PlayerId, PreconditionError, RulesConfig,
};

pub use crate::rules::{GameResult, RulesEngine, TargetRules};

pub use crate::session::{GameSession, MovePolicy, SessionTick, UniformRandom};

pub use crate::timer::{Expiry, TimerSlot, TimerTicket, TurnTimer};

//! Game sessions.
//!
//! A `GameSession` ties the rules, the current snapshot, the turn timer,
//! and the move history together, and makes the forced move when a
//! countdown runs out.

mod game;
pub mod policy;

pub use game::{GameSession, SessionTick};
pub use policy::{MovePolicy, UniformRandom};

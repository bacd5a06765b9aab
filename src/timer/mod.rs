//! Turn timer.
//!
//! Gives the active player a fixed window per decision. The timer only
//! counts and reports expiry; choosing and applying the forced move is the
//! session's job, through the same entry points a human choice uses.

pub mod countdown;

pub use countdown::{Expiry, TimerSlot, TimerTicket, TurnTimer};

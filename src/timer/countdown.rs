//! Cooperative per-second countdown.
//!
//! The host calls `tick()` once per second. There is no thread: callbacks
//! run inside `tick()`, on the caller's stack.
//!
//! At most one countdown is active. `start` cancels the previous one
//! before arming the new one, and each `start` returns a fresh
//! `TimerTicket` so callers can tell a stale expiry from the current one.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{GamePhase, RulesConfig};

/// Which decision the countdown is guarding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerSlot {
    /// Choosing the dice operation.
    DiceOperation,
    /// Choosing the final operation.
    FinalOperation,
}

impl TimerSlot {
    /// The slot guarding `phase`. The roll phase has none.
    #[must_use]
    pub fn for_phase(phase: GamePhase) -> Option<Self> {
        match phase {
            GamePhase::Roll => None,
            GamePhase::DiceOperation => Some(TimerSlot::DiceOperation),
            GamePhase::FinalOperation => Some(TimerSlot::FinalOperation),
        }
    }

    /// The phase this slot guards.
    #[must_use]
    pub fn phase(self) -> GamePhase {
        match self {
            TimerSlot::DiceOperation => GamePhase::DiceOperation,
            TimerSlot::FinalOperation => GamePhase::FinalOperation,
        }
    }

    /// Configured window for this slot.
    #[must_use]
    pub fn seconds(self, config: &RulesConfig) -> u32 {
        match self {
            TimerSlot::DiceOperation => config.dice_operation_seconds,
            TimerSlot::FinalOperation => config.final_operation_seconds,
        }
    }
}

/// Identifies one `start` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerTicket(u64);

/// Reported by `tick()` when a countdown reaches zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expiry {
    pub slot: TimerSlot,
    pub ticket: TimerTicket,
}

type TickCallback = Box<dyn FnMut(u32)>;
type CompleteCallback = Box<dyn FnOnce()>;

struct Countdown {
    slot: TimerSlot,
    ticket: TimerTicket,
    remaining: u32,
    on_tick: Option<TickCallback>,
    on_complete: Option<CompleteCallback>,
}

/// Owned turn timer. Dropping it drops any pending callbacks unrun.
#[derive(Default)]
pub struct TurnTimer {
    active: Option<Countdown>,
    issued: u64,
}

impl TurnTimer {
    /// Create an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a countdown without callbacks.
    pub fn start(&mut self, slot: TimerSlot, seconds: u32) -> TimerTicket {
        self.arm(slot, seconds, None, None)
    }

    /// Start a countdown.
    ///
    /// `on_tick` receives the seconds left after each tick; `on_complete`
    /// runs once, on the tick that reaches zero.
    pub fn start_with(
        &mut self,
        slot: TimerSlot,
        seconds: u32,
        on_tick: impl FnMut(u32) + 'static,
        on_complete: impl FnOnce() + 'static,
    ) -> TimerTicket {
        self.arm(slot, seconds, Some(Box::new(on_tick)), Some(Box::new(on_complete)))
    }

    fn arm(
        &mut self,
        slot: TimerSlot,
        seconds: u32,
        on_tick: Option<TickCallback>,
        on_complete: Option<CompleteCallback>,
    ) -> TimerTicket {
        self.stop();

        self.issued += 1;
        let ticket = TimerTicket(self.issued);
        trace!(?slot, seconds, ?ticket, "countdown started");

        self.active = Some(Countdown {
            slot,
            ticket,
            remaining: seconds,
            on_tick,
            on_complete,
        });
        ticket
    }

    /// Cancel the active countdown, if any.
    ///
    /// Safe to call at any time. Returns whether a countdown was cancelled.
    pub fn stop(&mut self) -> bool {
        match self.active.take() {
            Some(countdown) => {
                trace!(slot = ?countdown.slot, ticket = ?countdown.ticket, "countdown stopped");
                true
            }
            None => false,
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the expiry when this tick reaches zero; the timer is idle
    /// afterwards. A zero-second countdown expires on its first tick.
    pub fn tick(&mut self) -> Option<Expiry> {
        let countdown = self.active.as_mut()?;
        countdown.remaining = countdown.remaining.saturating_sub(1);

        let remaining = countdown.remaining;
        if let Some(on_tick) = countdown.on_tick.as_mut() {
            on_tick(remaining);
        }
        if remaining > 0 {
            return None;
        }

        let finished = self.active.take()?;
        if let Some(on_complete) = finished.on_complete {
            on_complete();
        }
        trace!(slot = ?finished.slot, ticket = ?finished.ticket, "countdown expired");

        Some(Expiry {
            slot: finished.slot,
            ticket: finished.ticket,
        })
    }

    /// Whether a countdown is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Seconds left on the active countdown.
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.active.as_ref().map(|c| c.remaining)
    }

    /// Slot of the active countdown.
    #[must_use]
    pub fn slot(&self) -> Option<TimerSlot> {
        self.active.as_ref().map(|c| c.slot)
    }

    /// Ticket of the active countdown.
    #[must_use]
    pub fn ticket(&self) -> Option<TimerTicket> {
        self.active.as_ref().map(|c| c.ticket)
    }
}

impl std::fmt::Debug for TurnTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnTimer")
            .field("slot", &self.slot())
            .field("remaining", &self.remaining())
            .field("ticket", &self.ticket())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_slot_phase_mapping() {
        assert_eq!(TimerSlot::for_phase(GamePhase::Roll), None);
        for slot in [TimerSlot::DiceOperation, TimerSlot::FinalOperation] {
            assert_eq!(TimerSlot::for_phase(slot.phase()), Some(slot));
        }

        let config = RulesConfig::default().with_turn_seconds(3, 8);
        assert_eq!(TimerSlot::DiceOperation.seconds(&config), 3);
        assert_eq!(TimerSlot::FinalOperation.seconds(&config), 8);
    }

    #[test]
    fn test_counts_down_and_expires_once() {
        let ticks = Rc::new(RefCell::new(Vec::new()));
        let completions = Rc::new(Cell::new(0));

        let mut timer = TurnTimer::new();
        let ticket = {
            let ticks = Rc::clone(&ticks);
            let completions = Rc::clone(&completions);
            timer.start_with(
                TimerSlot::DiceOperation,
                3,
                move |left| ticks.borrow_mut().push(left),
                move || completions.set(completions.get() + 1),
            )
        };

        assert_eq!(timer.tick(), None);
        assert_eq!(timer.tick(), None);
        assert_eq!(
            timer.tick(),
            Some(Expiry {
                slot: TimerSlot::DiceOperation,
                ticket,
            })
        );

        assert_eq!(*ticks.borrow(), vec![2, 1, 0]);
        assert_eq!(completions.get(), 1);
        assert!(!timer.is_active());

        for _ in 0..5 {
            assert_eq!(timer.tick(), None);
        }
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut timer = TurnTimer::new();
        assert!(!timer.stop());

        timer.start(TimerSlot::FinalOperation, 5);
        assert!(timer.stop());
        assert!(!timer.stop());
        assert_eq!(timer.tick(), None);
    }

    #[test]
    fn test_stop_prevents_completion() {
        let completions = Rc::new(Cell::new(0));
        let mut timer = TurnTimer::new();
        {
            let completions = Rc::clone(&completions);
            timer.start_with(TimerSlot::DiceOperation, 1, |_| {}, move || completions.set(1));
        }

        timer.stop();
        assert_eq!(timer.tick(), None);
        assert_eq!(completions.get(), 0);
    }

    #[test]
    fn test_restart_cancels_previous() {
        let first_fired = Rc::new(Cell::new(false));
        let mut timer = TurnTimer::new();

        let first = {
            let first_fired = Rc::clone(&first_fired);
            timer.start_with(TimerSlot::DiceOperation, 1, |_| {}, move || first_fired.set(true))
        };
        let second = timer.start(TimerSlot::FinalOperation, 2);

        assert!(second > first);
        assert_eq!(timer.slot(), Some(TimerSlot::FinalOperation));
        assert_eq!(timer.remaining(), Some(2));

        assert_eq!(timer.tick(), None);
        let expiry = timer.tick().unwrap();
        assert_eq!(expiry.ticket, second);
        assert!(!first_fired.get());
    }

    #[test]
    fn test_zero_seconds_expires_on_first_tick() {
        let mut timer = TurnTimer::new();
        let ticket = timer.start(TimerSlot::DiceOperation, 0);

        assert_eq!(timer.remaining(), Some(0));
        assert_eq!(timer.tick().map(|e| e.ticket), Some(ticket));
    }

    #[test]
    fn test_drop_releases_callbacks() {
        let marker = Rc::new(());
        {
            let mut timer = TurnTimer::new();
            let held = Rc::clone(&marker);
            timer.start_with(TimerSlot::DiceOperation, 5, move |_| drop(Rc::clone(&held)), || {});
            assert_eq!(Rc::strong_count(&marker), 2);
        }
        assert_eq!(Rc::strong_count(&marker), 1);
    }
}

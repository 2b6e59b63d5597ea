//! Debounced load triggering for filter inputs.
//!
//! Typing into a search box must not fire a request per keystroke: each
//! trigger re-arms a quiet period (300 ms by default) and only the last
//! trigger survives it. The ticket logic lives in [`DebounceGate`] so it can
//! be unit-tested natively; [`Debouncer`] wires it to the browser timer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Monotonic ticket counter. Arming invalidates every earlier ticket;
/// a timer that wakes up with a stale ticket does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceGate {
    current: u64,
}

impl DebounceGate {
    pub fn arm(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }

    /// Invalidate all outstanding tickets without issuing a new one.
    pub fn cancel(&mut self) {
        self.current += 1;
    }
}

/// Browser-side debouncer; `Copy` so page closures can capture it freely.
#[derive(Clone, Copy)]
pub struct Debouncer {
    gate: StoredValue<DebounceGate>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DEBOUNCE_MS)
    }

    pub fn with_delay(delay_ms: u32) -> Self {
        Self {
            gate: StoredValue::new(DebounceGate::default()),
            delay_ms,
        }
    }

    /// Run `action` after the quiet period unless superseded or cancelled.
    pub fn schedule(&self, action: impl FnOnce() + 'static) {
        let mut ticket = 0;
        self.gate.update_value(|g| ticket = g.arm());
        let gate = self.gate;
        let delay = self.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if gate.with_value(|g| g.is_current(ticket)) {
                action();
            }
        });
    }

    /// Drop any pending trigger. Called on unmount.
    pub fn cancel(&self) {
        self.gate.update_value(|g| g.cancel());
    }

    /// Cancel the quiet period and run `action` right now ("reload" buttons).
    pub fn flush(&self, action: impl FnOnce() + 'static) {
        self.cancel();
        action();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_ticket_survives() {
        let mut gate = DebounceGate::default();
        let first = gate.arm();
        let second = gate.arm();
        let third = gate.arm();
        assert!(!gate.is_current(first));
        assert!(!gate.is_current(second));
        assert!(gate.is_current(third));
    }

    #[test]
    fn rapid_sequence_collapses_to_one_execution() {
        // Models N keystrokes inside the window: every timer fires eventually,
        // but only the ticket from the final keystroke passes the gate.
        let mut gate = DebounceGate::default();
        let tickets: Vec<u64> = (0..10).map(|_| gate.arm()).collect();
        let executed: Vec<&u64> = tickets.iter().filter(|t| gate.is_current(**t)).collect();
        assert_eq!(executed, vec![tickets.last().unwrap()]);
    }

    #[test]
    fn cancel_invalidates_pending_ticket() {
        let mut gate = DebounceGate::default();
        let ticket = gate.arm();
        gate.cancel();
        assert!(!gate.is_current(ticket));
    }

    #[test]
    fn new_ticket_after_cancel_is_valid() {
        let mut gate = DebounceGate::default();
        gate.arm();
        gate.cancel();
        let fresh = gate.arm();
        assert!(gate.is_current(fresh));
    }
}

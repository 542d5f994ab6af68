//! State machine definition
//!
//! All display, haptic, and tick-subscription behavior is a function of
//! the current state and an event.

use super::events::Event;

/// Timer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// Duration adjustable, timer not armed
    Idle,
    /// Get-ready phase counting down before the real countdown
    ReadyCountdown,
    /// Live countdown in progress
    Running,
    /// Countdown halted (manually or by completion), awaiting reset
    Paused,
}

impl TimerState {
    /// Check if this state holds the one-second tick subscription
    pub fn ticking(&self) -> bool {
        matches!(self, TimerState::ReadyCountdown | TimerState::Running)
    }

    /// Check if duration adjustment is accepted in this state
    pub fn accepts_adjustment(&self) -> bool {
        matches!(self, TimerState::Idle)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use TimerState::*;

        match (self, event) {
            // Arming: confirm in Idle starts the get-ready phase
            (Idle, ConfirmPressed) => ReadyCountdown,

            // Get-ready phase: runs to completion or is cancelled
            (ReadyCountdown, ReadyElapsed) => Running,
            (ReadyCountdown, ConfirmPressed) => Paused,

            // Running: manual pause or countdown completion
            (Running, ConfirmPressed) => Paused,
            (Running, CountdownElapsed) => Paused,

            // Paused: confirm resets back to the adjustment screen
            (Paused, ConfirmPressed) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}

//! State machine for the countdown lifecycle
//!
//! Defines the authoritative runtime behavior of the timer.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::{Button, Event};
pub use machine::TimerState;

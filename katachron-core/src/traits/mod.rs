//! Capability traits for the timer's collaborators
//!
//! These traits define the interface between the countdown logic and the
//! device-specific backends (screen, vibration motor, tick source). All
//! methods are infallible: a collaborator handles its own failures and
//! never surfaces them to the timer.

pub mod display;
pub mod haptics;
pub mod ticks;

pub use display::{ActionIcon, CountdownDisplay, IconSlot};
pub use haptics::Haptics;
pub use ticks::TickSource;

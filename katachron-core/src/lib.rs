//! Hardware-agnostic core logic for the Katachron countdown timer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (display, haptics, tick source)
//! - State machine for the countdown lifecycle
//! - The timer coordinator that drives the collaborators on each transition
//! - Digit formatting for the two-character readout
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod format;
pub mod state;
pub mod timer;
pub mod traits;

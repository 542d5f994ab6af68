//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::String;
use portable_atomic::AtomicBool;

use katachron_core::state::Button;
use katachron_core::traits::{ActionIcon, IconSlot};

/// Channel capacity for timer inputs (button presses and ticks)
const INPUT_CHANNEL_SIZE: usize = 8;

/// Channel capacity for UI commands to the display task
const UI_CHANNEL_SIZE: usize = 16;

/// Channel capacity for haptic commands
const HAPTIC_CHANNEL_SIZE: usize = 4;

/// Inputs consumed by the timer task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerInput {
    /// Debounced button press
    Press(Button),
    /// One second of countdown time elapsed
    Tick,
}

/// Display updates produced by the timer task
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiCommand {
    /// Replace the countdown digits
    Countdown(String<2>),
    /// Show or hide the ready banner
    ReadyIndicator(bool),
    /// Assign or clear a button's action icon
    ActionIcon(IconSlot, Option<ActionIcon>),
}

/// Haptic pulses requested by the timer task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HapticCommand {
    /// Short tap (final seconds cue)
    Short,
    /// Long buzz (phase boundary)
    Long,
}

/// Button presses and countdown ticks for the timer task
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, TimerInput, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// UI commands for the display task
pub static UI_CHANNEL: Channel<CriticalSectionRawMutex, UiCommand, UI_CHANNEL_SIZE> =
    Channel::new();

/// Haptic commands for the vibration motor task
pub static HAPTIC_CHANNEL: Channel<CriticalSectionRawMutex, HapticCommand, HAPTIC_CHANNEL_SIZE> =
    Channel::new();

/// Whether the timer currently wants countdown ticks
///
/// Set by the timer task through its tick source port, read by the tick
/// task before forwarding a tick into [`INPUT_CHANNEL`].
pub static TICK_SUBSCRIBED: AtomicBool = AtomicBool::new(false);

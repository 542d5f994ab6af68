//! Vibration motor pattern driver
//!
//! Plays the haptic cues on the eccentric-mass motor. The driver holds no
//! hardware: call `update()` periodically and apply the returned level to
//! the motor output.
//!
//! # Usage
//!
//! ```ignore
//! let mut motor = VibrationMotor::new(VibrationConfig::default());
//! motor.pulse_long();
//!
//! // In the periodic update loop:
//! if motor.update(UPDATE_INTERVAL_MS) {
//!     motor_pin.set_high();
//! } else {
//!     motor_pin.set_low();
//! }
//! ```

/// Vibration motor configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VibrationConfig {
    /// Short pulse length in ms ("final seconds" cue)
    pub short_pulse_ms: u32,
    /// Long pulse length in ms ("get ready" and "done" cues)
    pub long_pulse_ms: u32,
}

impl Default for VibrationConfig {
    fn default() -> Self {
        Self {
            short_pulse_ms: 150,
            long_pulse_ms: 500,
        }
    }
}

/// Pulse playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pulse {
    /// Motor released
    Idle,
    /// Motor energized until the remaining time runs out
    Active { remaining_ms: u32 },
}

/// Vibration motor driver state
pub struct VibrationMotor {
    config: VibrationConfig,
    pulse: Pulse,
}

impl VibrationMotor {
    /// Create a new vibration motor driver
    pub fn new(config: VibrationConfig) -> Self {
        Self {
            config,
            pulse: Pulse::Idle,
        }
    }

    /// Start a short pulse
    ///
    /// A pulse already playing is replaced.
    pub fn pulse_short(&mut self) {
        self.pulse = Pulse::Active {
            remaining_ms: self.config.short_pulse_ms,
        };
    }

    /// Start a long pulse
    pub fn pulse_long(&mut self) {
        self.pulse = Pulse::Active {
            remaining_ms: self.config.long_pulse_ms,
        };
    }

    /// Check if a pulse is currently playing
    pub fn is_active(&self) -> bool {
        self.pulse != Pulse::Idle
    }

    /// Advance the pattern clock by `delta_ms`
    ///
    /// Returns true while the motor should be energized, including the
    /// final slice of a pulse.
    pub fn update(&mut self, delta_ms: u32) -> bool {
        match self.pulse {
            Pulse::Idle => false,
            Pulse::Active { remaining_ms } => {
                let remaining = remaining_ms.saturating_sub(delta_ms);
                if remaining == 0 {
                    self.pulse = Pulse::Idle;
                } else {
                    self.pulse = Pulse::Active {
                        remaining_ms: remaining,
                    };
                }
                true
            }
        }
    }
}

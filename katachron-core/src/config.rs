//! Configuration type definitions

/// Upper bound for the configurable duration (seconds)
pub const MAX_DURATION_S: u8 = 60;

/// Duration preloaded at power-on (seconds)
pub const DEFAULT_DURATION_S: u8 = 9;

/// Length of the get-ready phase (seconds)
pub const READY_PHASE_S: u8 = 10;

/// Timer behavior configuration
///
/// The defaults reproduce the device's stock behavior. `ready_warning_s`
/// must stay below `ready_phase_s` for the get-ready cue to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    /// Longest configurable countdown (seconds)
    pub max_duration_s: u8,
    /// Duration installed at power-on (seconds)
    pub default_duration_s: u8,
    /// Get-ready phase length (seconds)
    pub ready_phase_s: u8,
    /// Ready value that triggers the get-ready long pulse
    pub ready_warning_s: u8,
    /// Live values at or below this (and above zero) get a short pulse
    pub final_window_s: u8,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            max_duration_s: MAX_DURATION_S,
            default_duration_s: DEFAULT_DURATION_S,
            ready_phase_s: READY_PHASE_S,
            ready_warning_s: 3,
            final_window_s: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TimerConfig::default();
        assert_eq!(config.max_duration_s, 60);
        assert_eq!(config.default_duration_s, 9);
        assert_eq!(config.ready_phase_s, 10);
        assert_eq!(config.ready_warning_s, 3);
        assert_eq!(config.final_window_s, 3);
    }

    #[test]
    fn test_default_duration_within_bounds() {
        let config = TimerConfig::default();
        assert!(config.default_duration_s <= config.max_duration_s);
    }
}

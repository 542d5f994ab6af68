//! Haptics collaborator trait

/// Trait for haptic feedback
///
/// Implementations drive the vibration motor. A pulse request while a
/// pulse is still playing replaces it.
pub trait Haptics {
    /// Play a short pulse ("final seconds" cue)
    fn pulse_short(&mut self);

    /// Play a long pulse ("get ready" and "done" cues)
    fn pulse_long(&mut self);
}

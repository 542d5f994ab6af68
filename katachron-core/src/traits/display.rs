//! Display collaborator trait

/// Action bar slots, one per physical button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IconSlot {
    /// Slot next to the increment button
    Increment,
    /// Slot next to the decrement button
    Decrement,
    /// Slot next to the confirm button
    Confirm,
}

/// Icons that can occupy an action bar slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActionIcon {
    /// Raise the duration
    Plus,
    /// Lower the duration
    Minus,
    /// Arm the timer
    Play,
    /// Halt the countdown
    Stop,
    /// Reset back to the adjustment screen
    Reset,
}

/// Trait for the countdown display
///
/// Implementations render the two-digit readout, the get-ready marker,
/// and the three button-affordance icons. Calls arrive on every state or
/// value change that affects what is shown.
pub trait CountdownDisplay {
    /// Show a new countdown value
    ///
    /// `digits` is always a two-character zero-padded decimal string.
    fn render_countdown(&mut self, digits: &str);

    /// Show or hide the get-ready marker
    fn set_ready_indicator(&mut self, visible: bool);

    /// Install an icon in an action bar slot, or clear it with `None`
    fn set_action_icon(&mut self, slot: IconSlot, icon: Option<ActionIcon>);
}

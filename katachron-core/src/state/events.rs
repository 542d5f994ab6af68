//! Events that trigger state transitions

/// Physical buttons on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Top button, raises the configured duration
    Increment,
    /// Bottom button, lowers the configured duration
    Decrement,
    /// Middle button: start, pause, reset
    Confirm,
}

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Button events
    /// User pressed the increment button
    IncrementPressed,
    /// User pressed the decrement button
    DecrementPressed,
    /// User pressed the confirm button
    ConfirmPressed,

    // Tick-driven events
    /// The get-ready countdown reached zero
    ReadyElapsed,
    /// The live countdown reached zero
    CountdownElapsed,
}

impl Event {
    /// Check if this event is user-initiated
    pub fn is_button_event(&self) -> bool {
        matches!(
            self,
            Event::IncrementPressed | Event::DecrementPressed | Event::ConfirmPressed
        )
    }

    /// Check if this event was produced by the tick handler
    pub fn is_tick_event(&self) -> bool {
        matches!(self, Event::ReadyElapsed | Event::CountdownElapsed)
    }
}

impl From<Button> for Event {
    fn from(button: Button) -> Self {
        match button {
            Button::Increment => Event::IncrementPressed,
            Button::Decrement => Event::DecrementPressed,
            Button::Confirm => Event::ConfirmPressed,
        }
    }
}

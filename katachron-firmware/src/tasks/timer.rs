//! Timer coordination task
//!
//! Owns the countdown timer and connects its collaborator ports to the
//! firmware channels: display updates go to the display task, haptic
//! pulses to the vibration task, and tick demand gates the tick task.

use defmt::*;
use heapless::String;
use portable_atomic::Ordering;

use katachron_core::config::TimerConfig;
use katachron_core::timer::CountdownTimer;
use katachron_core::traits::{ActionIcon, CountdownDisplay, Haptics, IconSlot, TickSource};

use crate::channels::{
    HapticCommand, TimerInput, UiCommand, HAPTIC_CHANNEL, INPUT_CHANNEL, TICK_SUBSCRIBED,
    UI_CHANNEL,
};

/// Display port backed by the UI command channel
struct ChannelDisplay;

impl CountdownDisplay for ChannelDisplay {
    fn render_countdown(&mut self, digits: &str) {
        let mut text: String<2> = String::new();
        let _ = text.push_str(digits);
        send_ui(UiCommand::Countdown(text));
    }

    fn set_ready_indicator(&mut self, visible: bool) {
        send_ui(UiCommand::ReadyIndicator(visible));
    }

    fn set_action_icon(&mut self, slot: IconSlot, icon: Option<ActionIcon>) {
        send_ui(UiCommand::ActionIcon(slot, icon));
    }
}

fn send_ui(command: UiCommand) {
    if UI_CHANNEL.try_send(command).is_err() {
        warn!("UI channel full, dropping update");
    }
}

/// Haptics port backed by the haptic command channel
struct ChannelHaptics;

impl Haptics for ChannelHaptics {
    fn pulse_short(&mut self) {
        if HAPTIC_CHANNEL.try_send(HapticCommand::Short).is_err() {
            warn!("Haptic channel full, dropping short pulse");
        }
    }

    fn pulse_long(&mut self) {
        if HAPTIC_CHANNEL.try_send(HapticCommand::Long).is_err() {
            warn!("Haptic channel full, dropping long pulse");
        }
    }
}

/// Tick source port backed by the shared subscription flag
struct SharedTicks;

impl TickSource for SharedTicks {
    fn subscribe(&mut self) {
        TICK_SUBSCRIBED.store(true, Ordering::Relaxed);
    }

    fn unsubscribe(&mut self) {
        TICK_SUBSCRIBED.store(false, Ordering::Relaxed);
    }
}

/// Timer task - main coordination loop
#[embassy_executor::task]
pub async fn timer_task(config: TimerConfig) {
    info!("Timer task started");

    let mut timer = CountdownTimer::new(config, ChannelDisplay, ChannelHaptics, SharedTicks);
    timer.attach();
    info!("Timer attached, duration {}s", timer.duration_s());

    loop {
        let input = INPUT_CHANNEL.receive().await;
        let before = timer.state();

        match input {
            TimerInput::Press(button) => {
                debug!("Input: {:?}", button);
                timer.press(button);
            }
            TimerInput::Tick => {
                trace!("Tick");
                timer.tick();
            }
        }

        let after = timer.state();
        if after != before {
            info!("State: {:?} -> {:?}", before, after);
        }
    }
}

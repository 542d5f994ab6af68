//! Display task
//!
//! Applies UI commands to the watch face and pushes repaints to the
//! SH1106 panel over I2C.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;

use katachron_core::traits::CountdownDisplay;
use katachron_drivers::display::{Sh1106, TimerFace};

use crate::channels::{UiCommand, UI_CHANNEL};

/// Display task - owns the face and the panel
#[embassy_executor::task]
pub async fn display_task(i2c: I2c<'static, I2C0, Async>) {
    info!("Display task started");

    let mut panel = Sh1106::new(i2c);
    if let Err(e) = panel.init().await {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
    }

    let mut face = TimerFace::new();

    // First paint so the face layout shows before the timer attaches
    face.take_dirty();
    face.redraw();
    if let Err(e) = panel.flush(face.buffer()).await {
        warn!("Display flush failed: {:?}", e);
    }

    loop {
        let command = UI_CHANNEL.receive().await;
        apply(&mut face, command);

        // Drain queued updates into the same repaint
        while let Ok(command) = UI_CHANNEL.try_receive() {
            apply(&mut face, command);
        }

        if face.take_dirty() {
            face.redraw();
            if let Err(e) = panel.flush(face.buffer()).await {
                warn!("Display flush failed: {:?}", e);
            }
        }
    }
}

/// Apply one UI command to the face
fn apply(face: &mut TimerFace, command: UiCommand) {
    match command {
        UiCommand::Countdown(digits) => face.render_countdown(digits.as_str()),
        UiCommand::ReadyIndicator(visible) => face.set_ready_indicator(visible),
        UiCommand::ActionIcon(slot, icon) => face.set_action_icon(slot, icon),
    }
}

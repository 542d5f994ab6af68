//! Button input tasks
//!
//! One task instance per button. Debounces the active-low inputs and
//! forwards clean presses to the timer task.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use katachron_core::state::Button;

use crate::channels::{TimerInput, INPUT_CHANNEL};

/// Debounce delay after a falling edge in milliseconds
const DEBOUNCE_MS: u64 = 20;

/// Settle delay after release in milliseconds
const RELEASE_SETTLE_MS: u64 = 50;

/// Button press task - one instance per physical button
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(mut pin: Input<'static>, button: Button) {
    info!("Button task started: {:?}", button);

    loop {
        pin.wait_for_falling_edge().await;

        // Debounce
        Timer::after_millis(DEBOUNCE_MS).await;

        if pin.is_low() {
            debug!("Button: {:?}", button);
            INPUT_CHANNEL.send(TimerInput::Press(button)).await;

            // Wait for release, then let the contacts settle
            pin.wait_for_rising_edge().await;
            Timer::after_millis(RELEASE_SETTLE_MS).await;
        }
    }
}

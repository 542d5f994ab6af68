//! Tick task for countdown timekeeping
//!
//! Emits one tick per second into the input channel while the timer has
//! a countdown phase in progress. The ticker free-runs; the subscription
//! flag only gates forwarding.

use defmt::*;
use embassy_time::{Duration, Ticker};
use portable_atomic::Ordering;

use crate::channels::{TimerInput, INPUT_CHANNEL, TICK_SUBSCRIBED};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 1000;

/// Tick task - forwards one-second ticks while subscribed
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;

        if !TICK_SUBSCRIBED.load(Ordering::Relaxed) {
            continue;
        }

        if INPUT_CHANNEL.try_send(TimerInput::Tick).is_err() {
            warn!("Input channel full, dropping tick");
        }
    }
}

//! Vibration motor task
//!
//! Receives haptic commands from the timer task and drives the motor
//! pin through the VibrationMotor driver's pulse timing.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use katachron_drivers::vibration::{VibrationConfig, VibrationMotor};

use crate::channels::{HapticCommand, HAPTIC_CHANNEL};

/// Motor update interval in milliseconds
pub const UPDATE_INTERVAL_MS: u32 = 10;

/// Haptics task - drives the vibration motor pin
#[embassy_executor::task]
pub async fn haptics_task(mut motor_pin: Output<'static>) {
    info!("Haptics task started");

    let mut motor = VibrationMotor::new(VibrationConfig::default());
    let mut ticker = Ticker::every(Duration::from_millis(UPDATE_INTERVAL_MS as u64));

    loop {
        match select(HAPTIC_CHANNEL.receive(), ticker.next()).await {
            Either::First(command) => {
                debug!("Haptic: {:?}", command);
                match command {
                    HapticCommand::Short => motor.pulse_short(),
                    HapticCommand::Long => motor.pulse_long(),
                }
            }
            Either::Second(()) => {
                // Advance the pulse timing and apply the energize level
                if motor.update(UPDATE_INTERVAL_MS) {
                    motor_pin.set_high();
                } else {
                    motor_pin.set_low();
                }
            }
        }
    }
}

//! Katachron - Wearable Countdown Timer Firmware
//!
//! Main firmware binary for the RP2040-based countdown wristwatch.
//! Three buttons adjust and control the timer, an SH1106 OLED shows the
//! remaining time, and a small vibration motor taps out haptic cues.
//!
//! Named after the Greek "kata" (down) and "chronos" (time) -
//! the watch that counts time down.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use katachron_core::config::TimerConfig;
use katachron_core::state::Button;

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Katachron firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Timer behavior, fixed at build time
    let config = TimerConfig::default();

    // Setup buttons with internal pull-ups (pressed = low)
    // Pin assignments are board-specific (plus=GPIO11, minus=GPIO12, confirm=GPIO13)
    let increment = Input::new(p.PIN_11, Pull::Up);
    let decrement = Input::new(p.PIN_12, Pull::Up);
    let confirm = Input::new(p.PIN_13, Pull::Up);

    // Setup vibration motor output
    // Pin assignment is board-specific (motor driver gate on GPIO15)
    let motor_pin = Output::new(p.PIN_15, Level::Low);

    // Setup I2C0 for the OLED
    // Pin assignments are board-specific (SDA=GPIO0, SCL=GPIO1)
    let i2c = I2c::new_async(p.I2C0, p.PIN_1, p.PIN_0, Irqs, i2c::Config::default());

    info!("Board peripherals configured");

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner
        .spawn(tasks::button_task(increment, Button::Increment))
        .unwrap();
    spawner
        .spawn(tasks::button_task(decrement, Button::Decrement))
        .unwrap();
    spawner
        .spawn(tasks::button_task(confirm, Button::Confirm))
        .unwrap();
    spawner.spawn(tasks::haptics_task(motor_pin)).unwrap();
    spawner.spawn(tasks::display_task(i2c)).unwrap();
    spawner.spawn(tasks::timer_task(config)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

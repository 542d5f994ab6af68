//! Vibration motor control

pub mod motor;

pub use motor::{VibrationConfig, VibrationMotor};

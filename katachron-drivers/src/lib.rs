//! Hardware driver implementations
//!
//! This crate provides the device-side building blocks for the Katachron
//! timer:
//!
//! - Vibration motor pattern driver (short/long haptic pulses)
//! - SH1106 OLED driver and the watch face renderer

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod vibration;

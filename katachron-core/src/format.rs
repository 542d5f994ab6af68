//! Digit formatting for the two-character readout

use core::fmt::Write;

use heapless::String;

/// Format seconds as a zero-padded two-digit string ("07", "10", "00")
///
/// Values above 99 are clamped so the result always fits two characters.
pub fn two_digit(seconds: u8) -> String<2> {
    let mut out = String::new();
    let _ = write!(out, "{:02}", seconds.min(99));
    out
}

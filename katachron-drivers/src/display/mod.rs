//! OLED display support
//!
//! Split in two layers: `TimerFace` composes the watch face into a
//! page-organized frame buffer, `Sh1106` pushes a finished buffer over
//! I2C. The face is pure and host-testable; only the transport is async.

pub mod face;
pub mod font;
pub mod sh1106;

pub use face::{FrameBuffer, TimerFace};
pub use sh1106::Sh1106;

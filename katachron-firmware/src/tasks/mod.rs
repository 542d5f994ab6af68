//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod display;
pub mod haptics;
pub mod tick;
pub mod timer;

pub use buttons::button_task;
pub use display::display_task;
pub use haptics::haptics_task;
pub use tick::tick_task;
pub use timer::timer_task;

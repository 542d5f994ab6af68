//! Watch face composition
//!
//! `TimerFace` owns a 1-bit frame buffer in the SH1106 page layout and
//! redraws the whole face from its current state: two large countdown
//! digits, the ready banner along the top, and the action bar on the
//! right edge with one icon per button. Setters track a dirty flag so
//! the firmware only repaints when something changed.

use heapless::String;
use katachron_core::traits::{ActionIcon, CountdownDisplay, IconSlot};

use crate::display::font;

/// Panel width in pixels.
pub const WIDTH: usize = 128;
/// Panel height in pixels.
pub const HEIGHT: usize = 64;
/// Number of 8-row pages.
pub const PAGES: usize = HEIGHT / 8;

/// Frame buffer in page layout, one byte per 8-pixel column slice.
pub type FrameBuffer = [[u8; WIDTH]; PAGES];

/// Columns reserved for the action bar on the right edge.
const ACTION_BAR_WIDTH: usize = 12;
/// Columns left of the action bar, where digits and banner live.
const FACE_WIDTH: usize = WIDTH - ACTION_BAR_WIDTH;
/// Separator line between face and action bar.
const SEPARATOR_X: usize = FACE_WIDTH;
/// Left edge of the icon column.
const ICON_X: usize = FACE_WIDTH + 2;

/// Scale factor applied to the digit glyphs.
const DIGIT_SCALE: usize = 4;
const DIGIT_WIDTH: usize = font::GLYPH_WIDTH * DIGIT_SCALE;
const DIGIT_HEIGHT: usize = font::GLYPH_HEIGHT * DIGIT_SCALE;
const DIGIT_GAP: usize = 4;
const DIGITS_X: usize = (FACE_WIDTH - (2 * DIGIT_WIDTH + DIGIT_GAP)) / 2;
const DIGITS_Y: usize = (HEIGHT - DIGIT_HEIGHT) / 2;

const BANNER_WIDTH: usize = font::READY.len() * (font::GLYPH_WIDTH + 1) - 1;
const BANNER_X: usize = (FACE_WIDTH - BANNER_WIDTH) / 2;
const BANNER_Y: usize = 0;

/// Composes the countdown face into a frame buffer.
pub struct TimerFace {
    buffer: FrameBuffer,
    digits: String<2>,
    ready: bool,
    icons: [Option<ActionIcon>; 3],
    dirty: bool,
}

impl TimerFace {
    /// Creates a blank face. Starts dirty so the first flush paints it.
    pub fn new() -> Self {
        Self {
            buffer: [[0; WIDTH]; PAGES],
            digits: String::new(),
            ready: false,
            icons: [None; 3],
            dirty: true,
        }
    }

    /// Returns the dirty flag and clears it.
    pub fn take_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    /// Rebuilds the frame buffer from the current face state.
    pub fn redraw(&mut self) {
        self.buffer = [[0; WIDTH]; PAGES];
        self.draw_countdown();
        if self.ready {
            self.draw_banner();
        }
        self.draw_action_bar();
    }

    /// The composed frame, ready to hand to the transport.
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    fn draw_countdown(&mut self) {
        for (i, ch) in self.digits.chars().take(2).enumerate() {
            if let Some(value) = ch.to_digit(10) {
                let x = DIGITS_X + i * (DIGIT_WIDTH + DIGIT_GAP);
                draw_glyph(
                    &mut self.buffer,
                    x,
                    DIGITS_Y,
                    &font::DIGITS[value as usize],
                    DIGIT_SCALE,
                );
            }
        }
    }

    fn draw_banner(&mut self) {
        for (i, glyph) in font::READY.iter().enumerate() {
            let x = BANNER_X + i * (font::GLYPH_WIDTH + 1);
            draw_glyph(&mut self.buffer, x, BANNER_Y, glyph, 1);
        }
    }

    fn draw_action_bar(&mut self) {
        for page in 0..PAGES {
            self.buffer[page][SEPARATOR_X] = 0xFF;
        }
        for slot in [IconSlot::Increment, IconSlot::Decrement, IconSlot::Confirm] {
            if let Some(icon) = self.icons[slot_index(slot)] {
                let page = slot_page(slot);
                let glyph = icon_glyph(icon);
                for (i, bits) in glyph.iter().enumerate() {
                    self.buffer[page][ICON_X + i] |= bits;
                }
            }
        }
    }
}

impl Default for TimerFace {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownDisplay for TimerFace {
    fn render_countdown(&mut self, digits: &str) {
        let mut text: String<2> = String::new();
        for ch in digits.chars().take(2) {
            let _ = text.push(ch);
        }
        if self.digits != text {
            self.digits = text;
            self.dirty = true;
        }
    }

    fn set_ready_indicator(&mut self, visible: bool) {
        if self.ready != visible {
            self.ready = visible;
            self.dirty = true;
        }
    }

    fn set_action_icon(&mut self, slot: IconSlot, icon: Option<ActionIcon>) {
        let index = slot_index(slot);
        if self.icons[index] != icon {
            self.icons[index] = icon;
            self.dirty = true;
        }
    }
}

fn slot_index(slot: IconSlot) -> usize {
    match slot {
        IconSlot::Increment => 0,
        IconSlot::Decrement => 1,
        IconSlot::Confirm => 2,
    }
}

/// Vertical placement of each icon slot, matching the button order on
/// the board edge: increment top, confirm middle, decrement bottom.
fn slot_page(slot: IconSlot) -> usize {
    match slot {
        IconSlot::Increment => 0,
        IconSlot::Confirm => 3,
        IconSlot::Decrement => 7,
    }
}

fn icon_glyph(icon: ActionIcon) -> &'static [u8; font::ICON_WIDTH] {
    match icon {
        ActionIcon::Plus => &font::ICON_PLUS,
        ActionIcon::Minus => &font::ICON_MINUS,
        ActionIcon::Play => &font::ICON_PLAY,
        ActionIcon::Stop => &font::ICON_STOP,
        ActionIcon::Reset => &font::ICON_RESET,
    }
}

fn draw_glyph(buffer: &mut FrameBuffer, x: usize, y: usize, glyph: &[u8; font::GLYPH_WIDTH], scale: usize) {
    for (col, bits) in glyph.iter().enumerate() {
        for row in 0..font::GLYPH_HEIGHT {
            if bits & (1 << row) == 0 {
                continue;
            }
            for dx in 0..scale {
                for dy in 0..scale {
                    set_pixel(buffer, x + col * scale + dx, y + row * scale + dy);
                }
            }
        }
    }
}

fn set_pixel(buffer: &mut FrameBuffer, x: usize, y: usize) {
    if x < WIDTH && y < HEIGHT {
        buffer[y / 8][x] |= 1 << (y % 8);
    }
}

//! Glyph tables for the watch face
//!
//! Column-major 5x7 glyphs, bit 0 at the top. Digits are scaled up at
//! draw time; the ready banner letters and the 8x8 action icons render
//! at native size.

/// Width of a 5x7 glyph in columns.
pub const GLYPH_WIDTH: usize = 5;
/// Height of a 5x7 glyph in rows.
pub const GLYPH_HEIGHT: usize = 7;

/// Digit glyphs `0` through `9`, indexed by value.
pub const DIGITS: [[u8; GLYPH_WIDTH]; 10] = [
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
];

/// Letters of the ready banner, in display order.
pub const READY: [[u8; GLYPH_WIDTH]; 5] = [
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
];

/// Width of an action icon in columns.
pub const ICON_WIDTH: usize = 8;

/// Plus sign, shown on the increment slot while adjusting.
pub const ICON_PLUS: [u8; ICON_WIDTH] = [0x18, 0x18, 0x18, 0x7E, 0x7E, 0x18, 0x18, 0x18];

/// Minus sign, shown on the decrement slot while adjusting.
pub const ICON_MINUS: [u8; ICON_WIDTH] = [0x00, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00];

/// Right-pointing triangle, shown on the confirm slot when idle.
pub const ICON_PLAY: [u8; ICON_WIDTH] = [0xFF, 0xFF, 0x7E, 0x7E, 0x3C, 0x3C, 0x18, 0x18];

/// Filled square, shown on the confirm slot while the timer runs.
pub const ICON_STOP: [u8; ICON_WIDTH] = [0x00, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x00];

/// Bar and left-pointing triangle, shown on the confirm slot when paused.
pub const ICON_RESET: [u8; ICON_WIDTH] = [0x7E, 0x00, 0x18, 0x3C, 0x7E, 0xFF, 0x00, 0x00];

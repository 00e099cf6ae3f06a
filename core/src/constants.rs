/// Bytes of addressable memory.
pub const MEMORY_SIZE: usize = 4096;

/// Programs are loaded here and execution starts here.
pub const PROGRAM_START: u16 = 0x200;

/// The largest program that fits between `PROGRAM_START` and the end of memory.
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Number of return addresses the call stack can hold.
pub const STACK_LEVELS: usize = 16;

/// Number of general purpose registers (V0..VF).
pub const REGISTER_COUNT: usize = 16;

/// Number of keys on the hexadecimal keypad.
pub const KEY_COUNT: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Framebuffer value of a lit pixel.
pub const PIXEL_ON: u32 = 0xFFFF_FFFF;
/// Framebuffer value of a dark pixel.
pub const PIXEL_OFF: u32 = 0x0000_0000;

/// Bytes per framebuffer row when it is handed to a renderer as raw bitmap data.
pub const FRAME_PITCH: usize = DISPLAY_WIDTH * std::mem::size_of::<u32>();

/// Where the glyph table lives in memory.
pub const GLYPH_START: u16 = 0x050;

/// Each glyph is 5 rows of 8 pixels.
pub const GLYPH_HEIGHT: u16 = 5;

/// # Glyph table
/// Built-in sprites for the hexadecimal digits 0..F.
///
/// Only the high nibble of each row is used, e.g. `0`:
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
pub const GLYPHS: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, GLYPHS, GLYPH_START, KEY_COUNT, MEMORY_SIZE, PIXEL_OFF,
    PROGRAM_START, REGISTER_COUNT, STACK_LEVELS,
};
use crate::opcode::Opcode;

/// The Chip-8 machine state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, starting at 0x200
///
/// Pointer
/// - (sp) the next free slot of the stack, 0..=16
///
/// Timers
/// - 2 8-bit timers (delay & sound), each decremented once per cycle while non-zero
///
/// ## Memory
/// - 16 level stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x000..0x200 is reserved, the glyph table sits at 0x050
/// - 64x32 frame buffer of 32-bit pixels
///
/// ## Input
/// - 16 key-down states for keys 0..F, only ever written by the input side
#[derive(Clone)]
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_LEVELS],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub keypad: [bool; KEY_COUNT],
    /// The instruction word currently being executed.
    pub op: Opcode,
    /// Set whenever the frame buffer is written.
    pub draw_flag: bool,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let glyphs = GLYPH_START as usize;
        memory[glyphs..glyphs + GLYPHS.len()].copy_from_slice(&GLYPHS);

        State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_LEVELS],
            memory,
            frame_buffer: [PIXEL_OFF; DISPLAY_WIDTH * DISPLAY_HEIGHT],
            keypad: [false; KEY_COUNT],
            op: Opcode::default(),
            draw_flag: false,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// The FrameBuffer is row-major, a pixel at (x, y) lives at `y * DISPLAY_WIDTH + x`
pub type FrameBuffer = [u32; DISPLAY_WIDTH * DISPLAY_HEIGHT];

use std::io::Read;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{KEY_COUNT, MAX_PROGRAM_SIZE, PROGRAM_START};
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::operations::span;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns the machine `state` and the random source used by `Cxkk`.
///
/// Supplies interfaces for:
/// - loading programs
/// - pressing and releasing keys
/// - advancing the machine by a single cycle
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
    rng: StdRng,
}

impl Chip8 {
    /// A freshly initialized machine with a random source seeded from the OS
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A freshly initialized machine whose random numbers are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Chip8 {
            state: State::new(),
            rng,
        }
    }

    /// Copies a program into memory at 0x200.
    ///
    /// Memory is left untouched if the program doesn't fit.
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(Error::ProgramTooLarge {
                size: program.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }
        let start = usize::from(PROGRAM_START);
        self.state.memory[start..start + program.len()].copy_from_slice(program);
        debug!("loaded {} byte program", program.len());
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// At most one byte more than fits is read, enough to tell an oversized ROM apart.
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut rom = Vec::with_capacity(MAX_PROGRAM_SIZE + 1);
        reader
            .take(MAX_PROGRAM_SIZE as u64 + 1)
            .read_to_end(&mut rom)?;
        self.load_program(&rom)
    }

    /// Advances the machine by a single cycle
    /// - fetches the opcode at pc and moves pc past it
    /// - decodes and executes it
    /// - ticks both timers
    ///
    /// On error the timers are not ticked and the failing instruction has had no effect.
    pub fn step(&mut self) -> Result<()> {
        let op = self.fetch()?;
        self.state.op = op;
        self.state.pc = self.state.pc.wrapping_add(0x2);

        trace!(
            "{} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        Instruction::decode(op)?.execute(&mut self.state, &mut self.rng)?;

        self.tick_timers();
        Ok(())
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn fetch(&self) -> Result<Opcode> {
        let bytes = &self.state.memory[span(self.state.pc, 2)?];
        Ok(Opcode::from_bytes(bytes[0], bytes[1]))
    }

    /// Decrements both timers if they're running
    fn tick_timers(&mut self) {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }

        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
            if self.state.sound_timer == 0 {
                debug!("sound timer expired");
            }
        }
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the logical key 0..F that was pressed
    pub fn key_press(&mut self, key: u8) {
        if let Some(down) = self.state.keypad.get_mut(usize::from(key)) {
            *down = true;
        }
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the logical key 0..F that was released
    pub fn key_release(&mut self, key: u8) {
        if let Some(down) = self.state.keypad.get_mut(usize::from(key)) {
            *down = false;
        }
    }

    /// Replaces the whole keypad at once
    pub fn set_keypad(&mut self, keypad: [bool; KEY_COUNT]) {
        self.state.keypad = keypad;
    }

    /// The current frame buffer
    pub fn frame(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the FrameBuffer if it changed since the last time it was taken
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Whether a tone should currently be playing
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

use thiserror::Error;

use crate::opcode::Opcode;

/// Everything that can stop the interpreter.
///
/// None of these are recoverable: an instruction that fails leaves no partial effects, but the
/// program that produced it can't meaningfully continue either.
#[derive(Debug, Error)]
pub enum Error {
    #[error("program is {size} bytes but at most {max} bytes fit in memory")]
    ProgramTooLarge { size: usize, max: usize },

    #[error("unknown instruction {opcode}")]
    UnknownInstruction { opcode: Opcode },

    #[error("call stack overflow at pc {pc:#05X}")]
    StackOverflow { pc: u16 },

    #[error("return with an empty call stack at pc {pc:#05X}")]
    StackUnderflow { pc: u16 },

    #[error("memory access out of bounds at address {address:#06X}")]
    MemoryOutOfBounds { address: usize },

    #[error("unable to read rom")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

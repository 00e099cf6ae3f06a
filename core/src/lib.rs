pub use chip8::Chip8;
pub use constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAME_PITCH, KEY_COUNT};
pub use error::{Error, Result};
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use state::{FrameBuffer, State};

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod opcode;
mod operations;
pub mod state;

use std::ops::Range;

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, GLYPH_HEIGHT, GLYPH_START, MEMORY_SIZE, PIXEL_OFF, PIXEL_ON,
    STACK_LEVELS,
};
use crate::error::{Error, Result};
use crate::state::State;

/// The flag register
const VF: usize = 0xF;

/// The range of `len` bytes of memory starting at `address`, if all of them exist.
/// An empty access reads nothing, so it can't be out of bounds.
pub(crate) fn span(address: u16, len: usize) -> Result<Range<usize>> {
    if len == 0 {
        return Ok(0..0);
    }
    let start = usize::from(address);
    let end = start + len;
    if end > MEMORY_SIZE {
        return Err(Error::MemoryOutOfBounds {
            address: start.max(MEMORY_SIZE),
        });
    }
    Ok(start..end)
}

/// Skips the next instruction; pc was already moved past the current one when it was fetched
fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.pc = state.pc.wrapping_add(0x2);
    }
}

/// Keys outside of 0..F can't be pressed
fn key_down(state: &State, key: u8) -> bool {
    state.keypad.get(usize::from(key)).copied().unwrap_or(false)
}

/// clear
pub fn clr(state: &mut State) {
    state.frame_buffer.iter_mut().for_each(|pixel| *pixel = PIXEL_OFF);
    state.draw_flag = true;
}

/// PC = STACK.pop()
pub fn rts(state: &mut State) -> Result<()> {
    if state.sp == 0 {
        return Err(Error::StackUnderflow {
            pc: state.pc.wrapping_sub(0x2),
        });
    }
    state.sp -= 1;
    state.pc = state.stack[usize::from(state.sp)];
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, nnn: u16) {
    state.pc = nnn;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, nnn: u16) -> Result<()> {
    let sp = usize::from(state.sp);
    if sp >= STACK_LEVELS {
        return Err(Error::StackOverflow {
            pc: state.pc.wrapping_sub(0x2),
        });
    }
    state.stack[sp] = state.pc;
    state.sp += 1;
    state.pc = nnn;
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(state: &mut State, x: usize, kk: u8) {
    let equal = state.v[x] == kk;
    skip_if(state, equal)
}

/// if Vx != kk then pc += 2
pub fn skne(state: &mut State, x: usize, kk: u8) {
    let differ = state.v[x] != kk;
    skip_if(state, differ)
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: usize, y: usize) {
    let equal = state.v[x] == state.v[y];
    skip_if(state, equal)
}

/// Vx = kk
pub fn load(state: &mut State, x: usize, kk: u8) {
    state.v[x] = kk;
}

/// Vx += kk
/// The carry is dropped and VF is left alone
pub fn add(state: &mut State, x: usize, kk: u8) {
    state.v[x] = state.v[x].wrapping_add(kk);
}

/// Vx = Vy
pub fn mv(state: &mut State, x: usize, y: usize) {
    state.v[x] = state.v[y];
}

/// Vx |= Vy
pub fn or(state: &mut State, x: usize, y: usize) {
    state.v[x] |= state.v[y];
}

/// Vx &= Vy
pub fn and(state: &mut State, x: usize, y: usize) {
    state.v[x] &= state.v[y];
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: usize, y: usize) {
    state.v[x] ^= state.v[y];
}

/// Vx += Vy; VF = carry
pub fn addr(state: &mut State, x: usize, y: usize) {
    let sum = u16::from(state.v[x]) + u16::from(state.v[y]);
    state.v[VF] = u8::from(sum > 0xFF);
    state.v[x] = (sum & 0xFF) as u8;
}

/// Vx -= Vy; VF = Vx > Vy
pub fn sub(state: &mut State, x: usize, y: usize) {
    state.v[VF] = u8::from(state.v[x] > state.v[y]);
    state.v[x] = state.v[x].wrapping_sub(state.v[y]);
}

/// Vx >>= 1; VF = lsb
pub fn shr(state: &mut State, x: usize) {
    state.v[VF] = state.v[x] & 0x1;
    state.v[x] >>= 1;
}

/// Vx = Vy - Vx; VF = Vy > Vx
pub fn subn(state: &mut State, x: usize, y: usize) {
    state.v[VF] = u8::from(state.v[y] > state.v[x]);
    state.v[x] = state.v[y].wrapping_sub(state.v[x]);
}

/// Vx <<= 1; VF = msb
pub fn shl(state: &mut State, x: usize) {
    state.v[VF] = (state.v[x] & 0x80) >> 7;
    state.v[x] <<= 1;
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: usize, y: usize) {
    let differ = state.v[x] != state.v[y];
    skip_if(state, differ)
}

/// I = addr
pub fn loadi(state: &mut State, nnn: u16) {
    state.i = nnn;
}

/// PC = V0 + addr
pub fn jumpi(state: &mut State, nnn: u16) {
    state.pc = u16::from(state.v[0x0]) + nnn;
}

/// Vx = random_byte & kk
pub fn rnd(state: &mut State, x: usize, kk: u8, random_byte: u8) {
    state.v[x] = random_byte & kk;
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the n-byte sprite at memory I..I+n onto the FrameBuffer at (Vx, Vy).
///
/// The origin wraps around the screen, the sprite itself is clipped at the right and bottom
/// edges. VF is set if any lit pixel gets erased.
pub fn draw(state: &mut State, x: usize, y: usize, n: u8) -> Result<()> {
    let rows = span(state.i, usize::from(n))?;
    let mut sprite = [0u8; 0x10];
    let sprite = &mut sprite[..rows.len()];
    sprite.copy_from_slice(&state.memory[rows]);

    let origin_x = usize::from(state.v[x]) % DISPLAY_WIDTH;
    let origin_y = usize::from(state.v[y]) % DISPLAY_HEIGHT;

    state.v[VF] = 0x0;
    for (row, byte) in sprite.iter().enumerate() {
        let py = origin_y + row;
        if py >= DISPLAY_HEIGHT {
            break;
        }
        for col in 0..8 {
            let px = origin_x + col;
            if px >= DISPLAY_WIDTH {
                break;
            }
            if byte & (0x80 >> col) == 0 {
                continue;
            }
            let pixel = &mut state.frame_buffer[py * DISPLAY_WIDTH + px];
            if *pixel == PIXEL_ON {
                state.v[VF] = 0x1;
            }
            *pixel ^= PIXEL_ON;
        }
    }
    state.draw_flag = true;
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, x: usize) {
    let pressed = key_down(state, state.v[x]);
    skip_if(state, pressed)
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, x: usize) {
    let pressed = key_down(state, state.v[x]);
    skip_if(state, !pressed)
}

/// Vx = DT
pub fn moved(state: &mut State, x: usize) {
    state.v[x] = state.delay_timer;
}

/// Vx = lowest pressed key, or run this instruction again next cycle
pub fn keyd(state: &mut State, x: usize) {
    match state.keypad.iter().position(|&down| down) {
        Some(key) => state.v[x] = key as u8,
        None => state.pc = state.pc.wrapping_sub(0x2),
    }
}

/// DT = Vx
pub fn loadd(state: &mut State, x: usize) {
    state.delay_timer = state.v[x];
}

/// ST = Vx
pub fn loads(state: &mut State, x: usize) {
    state.sound_timer = state.v[x];
}

/// I += Vx
pub fn addi(state: &mut State, x: usize) {
    state.i = state.i.wrapping_add(u16::from(state.v[x]));
}

/// I = address of the glyph for the digit in Vx
pub fn ldspr(state: &mut State, x: usize) {
    state.i = GLYPH_START + GLYPH_HEIGHT * u16::from(state.v[x]);
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(state: &mut State, x: usize) -> Result<()> {
    let digits = span(state.i, 3)?;
    let value = state.v[x];
    state.memory[digits].copy_from_slice(&[value / 100, value / 10 % 10, value % 10]);
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(state: &mut State, x: usize) -> Result<()> {
    let target = span(state.i, x + 1)?;
    state.memory[target].copy_from_slice(&state.v[..=x]);
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(state: &mut State, x: usize) -> Result<()> {
    let source = span(state.i, x + 1)?;
    state.v[..=x].copy_from_slice(&state.memory[source]);
    Ok(())
}

use rand::Rng;

use crate::error::{Error, Result};
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// A decoded Chip-8 instruction with its operands pulled out of the opcode.
///
/// `x` and `y` index registers, `kk` is an immediate byte, `nnn` an address and `n` a sprite
/// height.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0`
    ClearScreen,
    /// `00EE`
    Return,
    /// `1nnn`
    Jump { nnn: u16 },
    /// `2nnn`
    Call { nnn: u16 },
    /// `3xkk`
    SkipEqImm { x: usize, kk: u8 },
    /// `4xkk`
    SkipNeImm { x: usize, kk: u8 },
    /// `5xy0`
    SkipEqReg { x: usize, y: usize },
    /// `6xkk`
    LoadImm { x: usize, kk: u8 },
    /// `7xkk`
    AddImm { x: usize, kk: u8 },
    /// `8xy0`
    LoadReg { x: usize, y: usize },
    /// `8xy1`
    Or { x: usize, y: usize },
    /// `8xy2`
    And { x: usize, y: usize },
    /// `8xy3`
    Xor { x: usize, y: usize },
    /// `8xy4`
    AddReg { x: usize, y: usize },
    /// `8xy5`
    Sub { x: usize, y: usize },
    /// `8xy6`
    Shr { x: usize },
    /// `8xy7`
    Subn { x: usize, y: usize },
    /// `8xyE`
    Shl { x: usize },
    /// `9xy0`
    SkipNeReg { x: usize, y: usize },
    /// `Annn`
    LoadIndex { nnn: u16 },
    /// `Bnnn`
    JumpOffset { nnn: u16 },
    /// `Cxkk`
    Random { x: usize, kk: u8 },
    /// `Dxyn`
    Draw { x: usize, y: usize, n: u8 },
    /// `Ex9E`
    SkipKeyPressed { x: usize },
    /// `ExA1`
    SkipKeyNotPressed { x: usize },
    /// `Fx07`
    LoadDelay { x: usize },
    /// `Fx0A`
    WaitKey { x: usize },
    /// `Fx15`
    SetDelay { x: usize },
    /// `Fx18`
    SetSound { x: usize },
    /// `Fx1E`
    AddIndex { x: usize },
    /// `Fx29`
    LoadGlyph { x: usize },
    /// `Fx33`
    StoreBcd { x: usize },
    /// `Fx55`
    StoreRegs { x: usize },
    /// `Fx65`
    LoadRegs { x: usize },
}

impl Instruction {
    /// Selects the correct Instruction for a given Opcode.
    ///
    /// The first nibble picks the group. Groups 0x0, 0xE and 0xF are further cased on the low
    /// byte and group 0x8 on the low nibble; the remaining groups don't look at their operand
    /// nibbles at all. Anything else is an `UnknownInstruction`.
    pub fn decode(op: Opcode) -> Result<Self> {
        use Instruction::*;

        let x = usize::from(op.x());
        let y = usize::from(op.y());
        let (kk, nnn, n) = (op.kk(), op.nnn(), op.n());

        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => ClearScreen,
            (0x0, 0x0, 0xE, 0xE) => Return,
            (0x1, ..) => Jump { nnn },
            (0x2, ..) => Call { nnn },
            (0x3, ..) => SkipEqImm { x, kk },
            (0x4, ..) => SkipNeImm { x, kk },
            (0x5, ..) => SkipEqReg { x, y },
            (0x6, ..) => LoadImm { x, kk },
            (0x7, ..) => AddImm { x, kk },
            (0x8, .., 0x0) => LoadReg { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddReg { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => Shr { x },
            (0x8, .., 0x7) => Subn { x, y },
            (0x8, .., 0xE) => Shl { x },
            (0x9, ..) => SkipNeReg { x, y },
            (0xA, ..) => LoadIndex { nnn },
            (0xB, ..) => JumpOffset { nnn },
            (0xC, ..) => Random { x, kk },
            (0xD, ..) => Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => SkipKeyPressed { x },
            (0xE, _, 0xA, 0x1) => SkipKeyNotPressed { x },
            (0xF, _, 0x0, 0x7) => LoadDelay { x },
            (0xF, _, 0x0, 0xA) => WaitKey { x },
            (0xF, _, 0x1, 0x5) => SetDelay { x },
            (0xF, _, 0x1, 0x8) => SetSound { x },
            (0xF, _, 0x1, 0xE) => AddIndex { x },
            (0xF, _, 0x2, 0x9) => LoadGlyph { x },
            (0xF, _, 0x3, 0x3) => StoreBcd { x },
            (0xF, _, 0x5, 0x5) => StoreRegs { x },
            (0xF, _, 0x6, 0x5) => LoadRegs { x },
            _ => return Err(Error::UnknownInstruction { opcode: op }),
        };
        Ok(instruction)
    }

    /// Applies the instruction to `state`.
    ///
    /// `pc` is expected to already point past this instruction. `rng` is only consulted by
    /// `Random`.
    pub fn execute<R: Rng>(self, state: &mut State, rng: &mut R) -> Result<()> {
        use Instruction::*;

        match self {
            ClearScreen => clr(state),
            Return => rts(state)?,
            Jump { nnn } => jump(state, nnn),
            Call { nnn } => call(state, nnn)?,
            SkipEqImm { x, kk } => ske(state, x, kk),
            SkipNeImm { x, kk } => skne(state, x, kk),
            SkipEqReg { x, y } => skre(state, x, y),
            LoadImm { x, kk } => load(state, x, kk),
            AddImm { x, kk } => add(state, x, kk),
            LoadReg { x, y } => mv(state, x, y),
            Or { x, y } => or(state, x, y),
            And { x, y } => and(state, x, y),
            Xor { x, y } => xor(state, x, y),
            AddReg { x, y } => addr(state, x, y),
            Sub { x, y } => sub(state, x, y),
            Shr { x } => shr(state, x),
            Subn { x, y } => subn(state, x, y),
            Shl { x } => shl(state, x),
            SkipNeReg { x, y } => skrne(state, x, y),
            LoadIndex { nnn } => loadi(state, nnn),
            JumpOffset { nnn } => jumpi(state, nnn),
            Random { x, kk } => rnd(state, x, kk, rng.gen()),
            Draw { x, y, n } => draw(state, x, y, n)?,
            SkipKeyPressed { x } => skpr(state, x),
            SkipKeyNotPressed { x } => skup(state, x),
            LoadDelay { x } => moved(state, x),
            WaitKey { x } => keyd(state, x),
            SetDelay { x } => loadd(state, x),
            SetSound { x } => loads(state, x),
            AddIndex { x } => addi(state, x),
            LoadGlyph { x } => ldspr(state, x),
            StoreBcd { x } => bcd(state, x)?,
            StoreRegs { x } => stor(state, x)?,
            LoadRegs { x } => read(state, x)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod test_instruction {
    use super::*;
    use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, PIXEL_OFF, PIXEL_ON};
    use rand::rngs::mock::StepRng;

    /// Decodes and executes `op` against `state` as if it had just been fetched from 0x200
    fn run(op: u16, state: &mut State) {
        let mut rng = StepRng::new(0, 0);
        Instruction::decode(Opcode(op))
            .unwrap()
            .execute(state, &mut rng)
            .unwrap();
    }

    fn fetched() -> State {
        let mut state = State::new();
        state.pc = 0x202;
        state
    }

    #[test]
    fn test_decode_extracts_operands() {
        assert_eq!(
            Instruction::decode(Opcode(0xD12A)).unwrap(),
            Instruction::Draw { x: 0x1, y: 0x2, n: 0xA }
        );
        assert_eq!(
            Instruction::decode(Opcode(0x2ABC)).unwrap(),
            Instruction::Call { nnn: 0xABC }
        );
        assert_eq!(
            Instruction::decode(Opcode(0xC3F0)).unwrap(),
            Instruction::Random { x: 0x3, kk: 0xF0 }
        );
    }

    #[test]
    fn test_decode_ignores_unused_nibbles_of_register_skips() {
        assert_eq!(
            Instruction::decode(Opcode(0x512F)).unwrap(),
            Instruction::SkipEqReg { x: 0x1, y: 0x2 }
        );
        assert_eq!(
            Instruction::decode(Opcode(0x9121)).unwrap(),
            Instruction::SkipNeReg { x: 0x1, y: 0x2 }
        );
    }

    #[test]
    fn test_decode_rejects_unknown_opcodes() {
        for &op in &[
            0x0000, 0x00E1, 0x0123, 0x8008, 0x800F, 0xE19F, 0xE1A2, 0xF000, 0xF1FF, 0xF166,
        ] {
            match Instruction::decode(Opcode(op)) {
                Err(Error::UnknownInstruction { opcode }) => assert_eq!(opcode, Opcode(op)),
                other => panic!("{:04X} decoded to {:?}", op, other),
            }
        }
    }

    #[test]
    fn test_decode_covers_every_group() {
        let known = [
            0x00E0, 0x00EE, 0x1000, 0x2000, 0x3000, 0x4000, 0x5000, 0x6000, 0x7000, 0x8000, 0x8001,
            0x8002, 0x8003, 0x8004, 0x8005, 0x8006, 0x8007, 0x800E, 0x9000, 0xA000, 0xB000, 0xC000,
            0xD000, 0xE09E, 0xE0A1, 0xF007, 0xF00A, 0xF015, 0xF018, 0xF01E, 0xF029, 0xF033,
            0xF055, 0xF065,
        ];
        assert_eq!(known.len(), 34);
        for &op in &known {
            assert!(Instruction::decode(Opcode(op)).is_ok(), "{:04X}", op);
        }
    }

    #[test]
    fn test_00e0_cls() {
        let mut state = fetched();
        state.frame_buffer[0] = PIXEL_ON;
        run(0x00E0, &mut state);
        assert_eq!(state.frame_buffer[0], PIXEL_OFF);
        assert!(state.draw_flag);
        assert_eq!(state.pc, 0x202);
    }

    #[test]
    fn test_00ee_ret() {
        let mut state = fetched();
        state.sp = 0x1;
        state.stack[0x0] = 0x0ABC;
        run(0x00EE, &mut state);
        assert_eq!(state.sp, 0x0);
        assert_eq!(state.pc, 0x0ABC);
    }

    #[test]
    fn test_1nnn_jp() {
        let mut state = fetched();
        run(0x1ABC, &mut state);
        assert_eq!(state.pc, 0x0ABC);
    }

    #[test]
    fn test_2nnn_call() {
        let mut state = fetched();
        run(0x2123, &mut state);
        assert_eq!(state.sp, 0x1);
        assert_eq!(state.stack[0x0], 0x0202);
        assert_eq!(state.pc, 0x0123);
    }

    #[test]
    fn test_2nnn_call_then_00ee_ret_returns_past_the_call() {
        let mut state = fetched();
        run(0x2400, &mut state);
        run(0x00EE, &mut state);
        assert_eq!(state.sp, 0x0);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_3xkk_se_skips() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        run(0x3111, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_3xkk_se_doesntskip() {
        let mut state = fetched();
        run(0x3111, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_4xkk_sne_skips() {
        let mut state = fetched();
        run(0x4111, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_4xkk_sne_doesntskip() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        run(0x4111, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_5xy0_se_skips() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        run(0x5120, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_5xy0_se_doesntskip() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        run(0x5120, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_6xkk_ld() {
        let mut state = fetched();
        run(0x6122, &mut state);
        assert_eq!(state.v[0x1], 0x22);
    }

    #[test]
    fn test_7xkk_add_wraps_without_flag() {
        let mut state = fetched();
        state.v[0x1] = 0xFF;
        state.v[0xF] = 0x5;
        run(0x7102, &mut state);
        assert_eq!(state.v[0x1], 0x01);
        assert_eq!(state.v[0xF], 0x5);
    }

    #[test]
    fn test_8xy0_ld() {
        let mut state = fetched();
        state.v[0x2] = 0x1;
        run(0x8120, &mut state);
        assert_eq!(state.v[0x1], 0x1);
    }

    #[test]
    fn test_8xy1_or() {
        let mut state = fetched();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        run(0x8121, &mut state);
        assert_eq!(state.v[0x1], 0x7);
    }

    #[test]
    fn test_8xy2_and() {
        let mut state = fetched();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        run(0x8122, &mut state);
        assert_eq!(state.v[0x1], 0x2);
    }

    #[test]
    fn test_8xy3_xor() {
        let mut state = fetched();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        run(0x8123, &mut state);
        assert_eq!(state.v[0x1], 0x5);
    }

    #[test]
    fn test_8xy4_add_nocarry() {
        let mut state = fetched();
        state.v[0x1] = 0xEE;
        state.v[0x2] = 0x11;
        run(0x8124, &mut state);
        assert_eq!(state.v[0x1], 0xFF);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy4_add_carry() {
        let mut state = fetched();
        state.v[0x1] = 250;
        state.v[0x2] = 10;
        run(0x8124, &mut state);
        assert_eq!(state.v[0x1], 4);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy4_add_into_vf_keeps_sum_over_carry() {
        let mut state = fetched();
        state.v[0xF] = 10;
        state.v[0x1] = 250;
        run(0x8F14, &mut state);
        assert_eq!(state.v[0xF], 4);
        assert_eq!(state.v[0x1], 250);
    }

    #[test]
    fn test_8xy4_add_vf_to_itself() {
        let mut state = fetched();
        state.v[0xF] = 200;
        run(0x8FF4, &mut state);
        assert_eq!(state.v[0xF], 144);
    }

    #[test]
    fn test_8xy5_sub_vf_reads_new_flag() {
        let mut state = fetched();
        state.v[0x1] = 5;
        state.v[0xF] = 1;
        // VF = 5 > 1, then V1 = 5 - VF
        run(0x81F5, &mut state);
        assert_eq!(state.v[0x1], 4);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy7_subn_vf_reads_new_flag() {
        let mut state = fetched();
        state.v[0x1] = 5;
        state.v[0xF] = 1;
        // VF = 1 > 5, then V1 = VF - 5
        run(0x81F7, &mut state);
        assert_eq!(state.v[0x1], 251);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy5_sub_noborrow() {
        let mut state = fetched();
        state.v[0x1] = 0x33;
        state.v[0x2] = 0x11;
        run(0x8125, &mut state);
        assert_eq!(state.v[0x1], 0x22);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy5_sub_borrow() {
        let mut state = fetched();
        state.v[0x1] = 5;
        state.v[0x2] = 10;
        run(0x8125, &mut state);
        assert_eq!(state.v[0x1], 251);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy5_sub_equal_clears_flag() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        state.v[0xF] = 0x1;
        run(0x8125, &mut state);
        assert_eq!(state.v[0x1], 0x0);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy6_shr_lsb() {
        let mut state = fetched();
        state.v[0x1] = 0x5;
        run(0x8106, &mut state);
        assert_eq!(state.v[0x1], 0x2);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy6_shr_nolsb() {
        let mut state = fetched();
        state.v[0x1] = 0x4;
        run(0x8106, &mut state);
        assert_eq!(state.v[0x1], 0x2);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy7_subn_noborrow() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x33;
        run(0x8127, &mut state);
        assert_eq!(state.v[0x1], 0x22);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy7_subn_borrow() {
        let mut state = fetched();
        state.v[0x1] = 0x12;
        state.v[0x2] = 0x11;
        run(0x8127, &mut state);
        assert_eq!(state.v[0x1], 0xFF);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xye_shl_msb() {
        let mut state = fetched();
        state.v[0x1] = 0xFF;
        run(0x810E, &mut state);
        assert_eq!(state.v[0x1], 0xFE);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xye_shl_nomsb() {
        let mut state = fetched();
        state.v[0x1] = 0x4;
        run(0x810E, &mut state);
        assert_eq!(state.v[0x1], 0x8);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_9xy0_sne_skips() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        run(0x9120, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_9xy0_sne_doesntskip() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        run(0x9120, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_annn_ld() {
        let mut state = fetched();
        run(0xAABC, &mut state);
        assert_eq!(state.i, 0xABC);
    }

    #[test]
    fn test_bnnn_jp() {
        let mut state = fetched();
        state.v[0x0] = 0x2;
        run(0xBABC, &mut state);
        assert_eq!(state.pc, 0xABE);
    }

    #[test]
    fn test_cxkk_rnd_masks_random_byte() {
        let mut state = fetched();
        // StepRng hands out the same word every time, so the byte is fixed
        let mut rng = StepRng::new(0xABAB_ABAB_ABAB_ABAB, 0);
        Instruction::decode(Opcode(0xC10F))
            .unwrap()
            .execute(&mut state, &mut rng)
            .unwrap();
        assert_eq!(state.v[0x1] & 0xF0, 0x0);

        run(0xC200, &mut state);
        assert_eq!(state.v[0x2], 0x0);
    }

    #[test]
    fn test_dxyn_drw_draws() {
        let mut state = fetched();
        state.v[0x0] = 0x1;
        state.i = 0x050;
        // Draw the 0x0 glyph with a 1x 1y offset
        run(0xD005, &mut state);
        let mut expected = [PIXEL_OFF; DISPLAY_WIDTH * DISPLAY_HEIGHT];
        let rows: [[u32; 4]; 5] = [[1, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 1]];
        for (row, pixels) in rows.iter().enumerate() {
            for (col, &pixel) in pixels.iter().enumerate() {
                expected[(row + 1) * DISPLAY_WIDTH + col + 1] = pixel * PIXEL_ON;
            }
        }
        assert!(state.frame_buffer.iter().zip(expected.iter()).all(|(a, b)| a == b));
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_dxyn_drw_collides() {
        let mut state = fetched();
        state.i = 0x050;
        state.frame_buffer[0] = PIXEL_ON;
        run(0xD001, &mut state);
        assert_eq!(state.v[0xF], 0x1);
        assert_eq!(state.frame_buffer[0], PIXEL_OFF);
    }

    #[test]
    fn test_dxyn_drw_xors() {
        let mut state = fetched();
        state.i = 0x050;
        // 0 1 0 1 -> Set
        state.frame_buffer[2..6].copy_from_slice(&[PIXEL_OFF, PIXEL_ON, PIXEL_OFF, PIXEL_ON]);
        // 1 1 1 1 -> Draw xor, the top row of the 0x0 glyph
        state.v[0x0] = 0x2;
        state.v[0x1] = 0x0;
        run(0xD011, &mut state);
        assert_eq!(
            state.frame_buffer[2..6],
            [PIXEL_ON, PIXEL_OFF, PIXEL_ON, PIXEL_OFF]
        );
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_ex9e_skp_skips() {
        let mut state = fetched();
        state.keypad[0xE] = true;
        state.v[0x1] = 0xE;
        run(0xE19E, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_ex9e_skp_doesntskip() {
        let mut state = fetched();
        run(0xE19E, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_exa1_sknp_skips() {
        let mut state = fetched();
        run(0xE1A1, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_exa1_sknp_doesntskip() {
        let mut state = fetched();
        state.keypad[0xE] = true;
        state.v[0x1] = 0xE;
        run(0xE1A1, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_fx07_ld() {
        let mut state = fetched();
        state.delay_timer = 0xF;
        run(0xF107, &mut state);
        assert_eq!(state.v[0x1], 0xF);
    }

    #[test]
    fn test_fx0a_ld_repeats_without_key() {
        let mut state = fetched();
        run(0xF10A, &mut state);
        assert_eq!(state.pc, 0x0200);
        assert_eq!(state.v[0x1], 0x0);
    }

    #[test]
    fn test_fx0a_ld_takes_lowest_key() {
        let mut state = fetched();
        state.keypad[0x9] = true;
        state.keypad[0x4] = true;
        run(0xF10A, &mut state);
        assert_eq!(state.pc, 0x0202);
        assert_eq!(state.v[0x1], 0x4);
    }

    #[test]
    fn test_fx15_ld() {
        let mut state = fetched();
        state.v[0x1] = 0xF;
        run(0xF115, &mut state);
        assert_eq!(state.delay_timer, 0xF);
    }

    #[test]
    fn test_fx18_ld() {
        let mut state = fetched();
        state.v[0x1] = 0xF;
        run(0xF118, &mut state);
        assert_eq!(state.sound_timer, 0xF);
    }

    #[test]
    fn test_fx1e_add() {
        let mut state = fetched();
        state.i = 0x1;
        state.v[0x1] = 0x1;
        run(0xF11E, &mut state);
        assert_eq!(state.i, 0x2);
    }

    #[test]
    fn test_fx1e_add_wraps_at_sixteen_bits() {
        let mut state = fetched();
        state.i = 0xFFFF;
        state.v[0x1] = 0x2;
        run(0xF11E, &mut state);
        assert_eq!(state.i, 0x1);
    }

    #[test]
    fn test_fx29_ld() {
        let mut state = fetched();
        state.v[0x1] = 0x2;
        run(0xF129, &mut state);
        assert_eq!(state.i, 0x050 + 0xA);
    }

    #[test]
    fn test_fx33_ld() {
        let mut state = fetched();
        state.v[0x1] = 123;
        state.i = 0x300;
        run(0xF133, &mut state);
        assert_eq!(state.memory[0x300..0x303], [0x1, 0x2, 0x3]);
    }

    #[test]
    fn test_fx55_ld() {
        let mut state = fetched();
        state.i = 0x300;
        state.v[0x0..0x6].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5, 0x6]);
        run(0xF455, &mut state);
        assert_eq!(state.memory[0x300..0x306], [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]);
        assert_eq!(state.i, 0x300);
    }

    #[test]
    fn test_fx65_ld() {
        let mut state = fetched();
        state.i = 0x300;
        state.memory[0x300..0x306].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5, 0x6]);
        run(0xF465, &mut state);
        assert_eq!(state.v[0x0..0x6], [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]);
    }
}

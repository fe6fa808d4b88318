//! # Opcode Dispatch Table
//!
//! A 256-entry table mapping each opcode byte to the instruction it encodes
//! and the addressing mode it uses. The table is the single extension point
//! for new instructions: adding an encoding is a new row in `ENCODINGS`, and
//! adding an instruction is a new `Instruction` variant plus its arm in
//! `CPU::execute`.
//!
//! Bytes without a row decode to `None` and are skipped by the execution
//! loop.

use crate::addressing::AddressingMode;

/// Instruction kinds the core can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Force interrupt; halts the execution loop.
    Brk,
    /// Load Accumulator.
    Lda,
    /// Load X Register.
    Ldx,
    /// Store Accumulator.
    Sta,
    /// Transfer Accumulator to X.
    Tax,
}

/// Decoded form of a single opcode byte.
///
/// # Examples
///
/// ```
/// use nes6502::{decode, AddressingMode, Instruction};
///
/// let lda_imm = decode(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.instruction, Instruction::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.operand_bytes(), 1);
///
/// assert!(decode(0xEA).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Instruction mnemonic (e.g., "LDA", "STA").
    pub mnemonic: &'static str,

    /// Which instruction this byte encodes.
    pub instruction: Instruction,

    /// Addressing mode for this encoding.
    pub mode: AddressingMode,
}

impl Opcode {
    const fn new(mnemonic: &'static str, instruction: Instruction, mode: AddressingMode) -> Self {
        Self {
            mnemonic,
            instruction,
            mode,
        }
    }

    /// Operand bytes the loop skips after executing this opcode.
    pub const fn operand_bytes(&self) -> u16 {
        self.mode.operand_bytes()
    }
}

use AddressingMode::*;
use Instruction::*;

/// Every implemented encoding, one row per opcode byte.
const ENCODINGS: [(u8, Opcode); 22] = [
    (0x00, Opcode::new("BRK", Brk, Implied)),
    // LDA
    (0xA9, Opcode::new("LDA", Lda, Immediate)),
    (0xA5, Opcode::new("LDA", Lda, ZeroPage)),
    (0xB5, Opcode::new("LDA", Lda, ZeroPageX)),
    (0xAD, Opcode::new("LDA", Lda, Absolute)),
    (0xBD, Opcode::new("LDA", Lda, AbsoluteX)),
    (0xB9, Opcode::new("LDA", Lda, AbsoluteY)),
    (0xA1, Opcode::new("LDA", Lda, IndirectX)),
    (0xB1, Opcode::new("LDA", Lda, IndirectY)),
    // LDX
    (0xA2, Opcode::new("LDX", Ldx, Immediate)),
    (0xA6, Opcode::new("LDX", Ldx, ZeroPage)),
    (0xB6, Opcode::new("LDX", Ldx, ZeroPageY)),
    (0xAE, Opcode::new("LDX", Ldx, Absolute)),
    (0xBE, Opcode::new("LDX", Ldx, AbsoluteY)),
    // STA
    (0x85, Opcode::new("STA", Sta, ZeroPage)),
    (0x95, Opcode::new("STA", Sta, ZeroPageX)),
    (0x8D, Opcode::new("STA", Sta, Absolute)),
    (0x9D, Opcode::new("STA", Sta, AbsoluteX)),
    (0x99, Opcode::new("STA", Sta, AbsoluteY)),
    (0x81, Opcode::new("STA", Sta, IndirectX)),
    (0x91, Opcode::new("STA", Sta, IndirectY)),
    // Transfers
    (0xAA, Opcode::new("TAX", Tax, Implied)),
];

const fn build_table() -> [Option<Opcode>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < ENCODINGS.len() {
        let (byte, opcode) = ENCODINGS[i];
        table[byte as usize] = Some(opcode);
        i += 1;
    }
    table
}

/// Opcode table indexed by opcode byte value.
///
/// ```
/// use nes6502::OPCODE_TABLE;
///
/// assert_eq!(OPCODE_TABLE.len(), 256);
/// assert_eq!(OPCODE_TABLE[0x00].unwrap().mnemonic, "BRK");
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
pub const OPCODE_TABLE: [Option<Opcode>; 256] = build_table();

/// Looks up an opcode byte, returning `None` for bytes with no encoding.
pub fn decode(opcode: u8) -> Option<&'static Opcode> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

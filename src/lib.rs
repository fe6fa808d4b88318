//! # NES 6502 Instruction Core
//!
//! The instruction-execution core of a MOS 6502 emulator as found in the NES.
//! It models the register file, a flat 64KB address space, addressing-mode
//! resolution, the Zero/Negative flag rules and the fetch-decode-execute loop.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes6502::CPU;
//!
//! let mut cpu = CPU::default();
//!
//! // LDA #$10, BRK
//! cpu.load_and_run(&[0xA9, 0x10, 0x00]).unwrap();
//!
//! assert_eq!(cpu.a(), 0x10);
//! assert!(!cpu.flag_z());
//! assert!(!cpu.flag_n());
//! ```
//!
//! ## Modules
//!
//! - `cpu` - register state, address resolution and the execution loop
//! - `memory` - `MemoryBus` trait and the flat 64KB implementation
//! - `opcodes` - opcode dispatch table
//! - `addressing` - addressing mode enumeration
//! - `status` - status register flags
//! - `wasm` - JavaScript bindings (behind the `wasm` feature)

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{StepResult, CPU};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{decode, Instruction, Opcode, OPCODE_TABLE};
pub use status::Status;

use thiserror::Error;

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address programs are placed at by the standard load path.
pub const PROGRAM_START: u16 = 0x8000;

/// Size of the addressable memory in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Errors raised when copying a program into memory.
///
/// A rejected load leaves memory untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The program runs past the end of the 16-bit address space.
    #[error("program of {len} bytes at ${base:04X} runs past $FFFF")]
    ProgramTooLarge { len: usize, base: u16 },

    /// The program would overwrite the reset vector at $FFFC/$FFFD.
    #[error("program of {len} bytes at ${base:04X} overlaps the reset vector")]
    OverlapsResetVector { len: usize, base: u16 },
}

/// Errors that can occur while running the execution loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The instruction budget ran out before a BRK was fetched.
    #[error("no BRK reached after {executed} instructions")]
    BudgetExhausted { executed: u64 },
}

//! # 6502 Instruction Implementations
//!
//! Instruction semantics, organized by category. Each instruction is a free
//! function taking the CPU and, where it has an operand, the addressing mode
//! to resolve. None of them touch the program counter; operand bytes are
//! skipped by the execution loop.
//!
//! ## Categories
//!
//! - **load_store**: Load and store instructions (LDA, LDX, STA)
//! - **transfer**: Register transfer operations (TAX)

pub mod load_store;
pub mod transfer;

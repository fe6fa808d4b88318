//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 register file
//! and memory, the addressing-mode resolver and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next opcode byte
//! - **Status**: Zero and Negative flags, other bits carried through
//! - **Memory**: the bus the CPU owns exclusively
//!
//! ## Execution Model
//!
//! Each loop iteration fetches the opcode at PC and advances PC by one,
//! decodes it through `OPCODE_TABLE`, executes it, then skips its operand
//! bytes. BRK halts the loop; bytes with no table entry are skipped.
//!
//! - `step()`: Execute one instruction
//! - `run()`: Execute until BRK
//! - `run_for_instructions()`: Execute until BRK or the budget runs out

use log::{debug, trace};

use crate::instructions::{load_store, transfer};
use crate::{
    decode, AddressingMode, ExecutionError, FlatMemory, Instruction, LoadError, MemoryBus,
    Status, MEMORY_SIZE, PROGRAM_START, RESET_VECTOR,
};

/// Outcome of a single `step()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The loop should keep fetching.
    Continue,
    /// BRK was fetched; the loop is over.
    Halted,
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait, with
/// `FlatMemory` as the default.
///
/// # Examples
///
/// ```
/// use nes6502::CPU;
///
/// let mut cpu = CPU::default();
/// cpu.load_program(&[0xA9, 0x00, 0xAA, 0x00]).unwrap(); // LDA #$00, TAX, BRK
/// cpu.reset();
/// assert_eq!(cpu.pc(), 0x8000);
///
/// cpu.run();
/// assert_eq!(cpu.x(), 0x00);
/// assert!(cpu.flag_z());
/// ```
pub struct CPU<M: MemoryBus = FlatMemory> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next opcode)
    pub(crate) pc: u16,

    /// Status register
    pub(crate) status: Status,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl Default for CPU<FlatMemory> {
    fn default() -> Self {
        Self::new(FlatMemory::new())
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU over the given memory bus.
    ///
    /// A, X, Y and status start at zero and PC is loaded from the reset
    /// vector at $FFFC/$FFFD (little-endian), so a prepared memory image
    /// starts executing at its own entry point.
    pub fn new(memory: M) -> Self {
        let pc = memory.read_word(RESET_VECTOR);

        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc,
            status: Status::empty(),
            memory,
        }
    }

    // ========== Memory Access ==========

    /// Reads the byte at `addr`.
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Writes `value` at `addr`, including inside the program region.
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Reads the little-endian word at `addr`, wrapping past $FFFF.
    pub fn read_word(&self, addr: u16) -> u16 {
        self.memory.read_word(addr)
    }

    /// Writes `value` little-endian at `addr`, wrapping past $FFFF.
    pub fn write_word(&mut self, addr: u16, value: u16) {
        self.memory.write_word(addr, value);
    }

    /// Copies `program` into memory at `base` and points the reset vector
    /// at `base`.
    ///
    /// Programs that run past $FFFF or that would overwrite the reset vector
    /// are rejected, and memory is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{CPU, LoadError};
    ///
    /// let mut cpu = CPU::default();
    /// cpu.load(&[0xEA; 4], 0x0600).unwrap();
    /// assert_eq!(cpu.read_word(0xFFFC), 0x0600);
    ///
    /// assert_eq!(
    ///     cpu.load(&[0xEA; 4], 0xFFFE),
    ///     Err(LoadError::ProgramTooLarge { len: 4, base: 0xFFFE })
    /// );
    /// ```
    pub fn load(&mut self, program: &[u8], base: u16) -> Result<(), LoadError> {
        let len = program.len();
        let end = base as usize + len;

        if end > MEMORY_SIZE {
            return Err(LoadError::ProgramTooLarge { len, base });
        }

        let vector = RESET_VECTOR as usize;
        if len > 0 && (base as usize) < vector + 2 && end > vector {
            return Err(LoadError::OverlapsResetVector { len, base });
        }

        for (offset, &byte) in program.iter().enumerate() {
            self.memory.write(base.wrapping_add(offset as u16), byte);
        }
        self.memory.write_word(RESET_VECTOR, base);

        debug!("loaded {} bytes at ${:04X}", len, base);
        Ok(())
    }

    /// Loads `program` at the standard program address ($8000).
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), LoadError> {
        self.load(program, PROGRAM_START)
    }

    /// Loads `program` at $8000, resets, and runs until BRK.
    ///
    /// Returns the number of instructions fetched, including the BRK.
    pub fn load_and_run(&mut self, program: &[u8]) -> Result<u64, LoadError> {
        self.load_program(program)?;
        self.reset();
        Ok(self.run())
    }

    /// Resets the register file.
    ///
    /// A, X and status are cleared and PC is reloaded from the reset vector.
    /// Y is left as it was.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.status = Status::empty();
        self.pc = self.memory.read_word(RESET_VECTOR);

        debug!("reset, PC = ${:04X}", self.pc);
    }

    // ========== Address Resolution ==========

    /// Returns the effective address for `mode`, reading operand bytes at
    /// the current PC.
    ///
    /// PC is not advanced. `Implied` has no operand and resolves to PC
    /// itself; no instruction with that mode reads through it.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{AddressingMode, CPU};
    ///
    /// let mut cpu = CPU::default();
    /// cpu.set_pc(0x0600);
    /// cpu.write_byte(0x0600, 0xFF);
    /// cpu.set_x(0x02);
    ///
    /// // Zero page indexing wraps inside page zero
    /// assert_eq!(cpu.effective_address(AddressingMode::ZeroPageX), 0x0001);
    /// ```
    pub fn effective_address(&self, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::Implied | AddressingMode::Immediate => self.pc,

            AddressingMode::ZeroPage => self.memory.read(self.pc) as u16,

            AddressingMode::ZeroPageX => self.memory.read(self.pc).wrapping_add(self.x) as u16,

            AddressingMode::ZeroPageY => self.memory.read(self.pc).wrapping_add(self.y) as u16,

            AddressingMode::Absolute => self.memory.read_word(self.pc),

            AddressingMode::AbsoluteX => self
                .memory
                .read_word(self.pc)
                .wrapping_add(self.x as u16),

            AddressingMode::AbsoluteY => self
                .memory
                .read_word(self.pc)
                .wrapping_add(self.y as u16),

            AddressingMode::IndirectX => {
                let ptr = self.memory.read(self.pc).wrapping_add(self.x);
                self.read_zero_page_word(ptr)
            }

            AddressingMode::IndirectY => {
                let ptr = self.memory.read(self.pc);
                self.read_zero_page_word(ptr).wrapping_add(self.y as u16)
            }
        }
    }

    /// Reads a pointer from `ptr` and `ptr + 1`, both inside page zero.
    fn read_zero_page_word(&self, ptr: u8) -> u16 {
        let lo = self.memory.read(ptr as u16) as u16;
        let hi = self.memory.read(ptr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Sets Zero iff `value` is 0 and Negative iff bit 7 of `value` is set.
    pub fn update_zn(&mut self, value: u8) {
        self.status.update_zn(value);
    }

    // ========== Execution ==========

    /// Executes one instruction.
    ///
    /// 1. Fetch the opcode at PC and advance PC by one
    /// 2. Decode it through the opcode table
    /// 3. Execute it
    /// 4. Advance PC past its operand bytes
    ///
    /// BRK returns `StepResult::Halted`. Opcodes with no table entry do
    /// nothing beyond the fetch.
    pub fn step(&mut self) -> StepResult {
        let opcode = self.memory.read(self.pc);
        trace!("${:04X}: opcode 0x{:02X}", self.pc, opcode);
        self.pc = self.pc.wrapping_add(1);

        let Some(decoded) = decode(opcode) else {
            debug!(
                "skipping unknown opcode 0x{:02X} at ${:04X}",
                opcode,
                self.pc.wrapping_sub(1)
            );
            return StepResult::Continue;
        };

        let result = self.execute(decoded.instruction, decoded.mode);
        self.pc = self.pc.wrapping_add(decoded.operand_bytes());

        result
    }

    /// Executes one decoded instruction with PC at its first operand byte.
    fn execute(&mut self, instruction: Instruction, mode: AddressingMode) -> StepResult {
        match instruction {
            Instruction::Brk => {
                debug!("BRK at ${:04X}, halting", self.pc.wrapping_sub(1));
                return StepResult::Halted;
            }
            Instruction::Lda => load_store::execute_lda(self, mode),
            Instruction::Ldx => load_store::execute_ldx(self, mode),
            Instruction::Sta => load_store::execute_sta(self, mode),
            Instruction::Tax => transfer::execute_tax(self),
        }

        StepResult::Continue
    }

    /// Runs until BRK is fetched.
    ///
    /// Returns the number of instructions fetched, including the BRK. A
    /// program that never reaches a BRK never returns; use
    /// `run_for_instructions` when that matters.
    pub fn run(&mut self) -> u64 {
        let mut executed = 0;
        loop {
            executed += 1;
            if self.step() == StepResult::Halted {
                return executed;
            }
        }
    }

    /// Runs until BRK is fetched or `budget` instructions have been fetched.
    ///
    /// # Returns
    ///
    /// - `Ok(executed)` if BRK was reached, counting the BRK
    /// - `Err(ExecutionError::BudgetExhausted)` if the budget ran out first
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{ExecutionError, CPU};
    ///
    /// let mut cpu = CPU::default();
    /// cpu.load_program(&[0xEA, 0xEA, 0xEA, 0x00]).unwrap();
    /// cpu.reset();
    ///
    /// assert_eq!(
    ///     cpu.run_for_instructions(2),
    ///     Err(ExecutionError::BudgetExhausted { executed: 2 })
    /// );
    /// assert_eq!(cpu.run_for_instructions(10), Ok(2));
    /// ```
    pub fn run_for_instructions(&mut self, budget: u64) -> Result<u64, ExecutionError> {
        let mut executed = 0;
        while executed < budget {
            executed += 1;
            if self.step() == StepResult::Halted {
                return Ok(executed);
            }
        }

        Err(ExecutionError::BudgetExhausted { executed })
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the status register as a packed byte.
    pub fn status(&self) -> u8 {
        self.status.bits()
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.contains(Status::ZERO)
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.contains(Status::NEGATIVE)
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the whole status register, undefined bits included.
    pub fn set_status(&mut self, value: u8) {
        self.status = Status::from_bits_retain(value);
    }
}

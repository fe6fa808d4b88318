//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register state and memory image, executes one
//! instruction, and checks the invariants every step must keep.

#![no_main]

use arbitrary::Arbitrary;
use nes6502::{decode, FlatMemory, Instruction, MemoryBus, StepResult, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    pc: u16,
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (opcode + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents, for indirect pointers
    zero_page: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }

    let pc = input.cpu_state.pc;
    for (i, &byte) in input.memory.instruction_bytes.iter().enumerate() {
        memory.write(pc.wrapping_add(i as u16), byte);
    }

    let opcode = input.memory.instruction_bytes[0];

    let mut cpu = CPU::new(memory);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_pc(pc);
    cpu.set_status(input.cpu_state.status);

    let result = cpu.step();

    // Only Z and N may change
    assert_eq!(
        cpu.status() & !0b1000_0010,
        input.cpu_state.status & !0b1000_0010
    );
    assert_eq!(cpu.y(), input.cpu_state.y);

    match decode(opcode) {
        Some(op) if op.instruction == Instruction::Brk => {
            assert_eq!(result, StepResult::Halted);
            assert_eq!(cpu.pc(), pc.wrapping_add(1));
        }
        Some(op) => {
            assert_eq!(result, StepResult::Continue);
            assert_eq!(cpu.pc(), pc.wrapping_add(1 + op.operand_bytes()));
        }
        None => {
            assert_eq!(result, StepResult::Continue);
            assert_eq!(cpu.pc(), pc.wrapping_add(1));
            assert_eq!(cpu.a(), input.cpu_state.a);
            assert_eq!(cpu.x(), input.cpu_state.x);
        }
    }
});

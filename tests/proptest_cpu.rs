//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to check the flag rule, PC advancement and
//! memory word handling across all input combinations.

use nes6502::{FlatMemory, MemoryBus, StepResult, CPU, OPCODE_TABLE};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Opcodes with a table entry, excluding BRK
fn executable_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, entry)| matches!(entry, Some(op) if op.mnemonic != "BRK"))
        .map(|(i, _)| i as u8)
        .collect()
}

/// Opcodes with no table entry
fn unknown_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_none())
        .map(|(i, _)| i as u8)
        .collect()
}

#[test]
fn test_lda_flags_for_every_byte() {
    for value in 0..=255u8 {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xA9);
        cpu.memory_mut().write(0x8001, value);

        cpu.step();

        assert_eq!(cpu.a(), value);
        assert_eq!(cpu.flag_z(), value == 0, "Z for 0x{:02X}", value);
        assert_eq!(cpu.flag_n(), value & 0x80 != 0, "N for 0x{:02X}", value);
    }
}

proptest! {
    /// Property: LDA sets Z/N from the loaded byte and leaves the rest of
    /// the status register alone
    #[test]
    fn prop_lda_flag_rule(value in 0u8..=255u8, status in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xA9);
        cpu.memory_mut().write(0x8001, value);
        cpu.set_status(status);

        cpu.step();

        let mut expected = status & !0b1000_0010;
        if value == 0 {
            expected |= 0b0000_0010;
        }
        if value & 0x80 != 0 {
            expected |= 0b1000_0000;
        }
        prop_assert_eq!(cpu.status(), expected);
    }

    /// Property: PC advances by one plus the operand width of the opcode
    #[test]
    fn prop_pc_advances_by_instruction_size(
        opcode in prop::sample::select(executable_opcodes()),
        operand1 in 0u8..=255u8,
        operand2 in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        let decoded = OPCODE_TABLE[opcode as usize].unwrap();

        cpu.memory_mut().write(0x8000, opcode);
        cpu.memory_mut().write(0x8001, operand1);
        cpu.memory_mut().write(0x8002, operand2);

        prop_assert_eq!(cpu.step(), StepResult::Continue);
        prop_assert_eq!(cpu.pc(), 0x8001 + decoded.operand_bytes());
    }

    /// Property: Unknown opcodes advance PC by one and change nothing else
    #[test]
    fn prop_unknown_opcodes_are_noops(
        opcode in prop::sample::select(unknown_opcodes()),
        a in 0u8..=255u8,
        x in 0u8..=255u8,
        status in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, opcode);
        cpu.set_a(a);
        cpu.set_x(x);
        cpu.set_status(status);

        prop_assert_eq!(cpu.step(), StepResult::Continue);
        prop_assert_eq!(cpu.pc(), 0x8001);
        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.x(), x);
        prop_assert_eq!(cpu.status(), status);
    }

    /// Property: Word writes read back unchanged at every address,
    /// including $FFFF where the high byte lands at $0000
    #[test]
    fn prop_word_round_trip(addr in 0u16..=0xFFFF, value in 0u16..=0xFFFF) {
        let mut cpu = setup_cpu();

        cpu.write_word(addr, value);

        prop_assert_eq!(cpu.read_word(addr), value);
        prop_assert_eq!(cpu.read_byte(addr), (value & 0xFF) as u8);
        prop_assert_eq!(cpu.read_byte(addr.wrapping_add(1)), (value >> 8) as u8);
    }

    /// Property: Reset loads PC from the vector and never touches Y
    #[test]
    fn prop_reset_reads_vector_and_keeps_y(vector in 0u16..=0xFFFF, y in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.write_word(0xFFFC, vector);
        cpu.set_a(0x11);
        cpu.set_x(0x22);
        cpu.set_y(y);
        cpu.set_status(0xFF);

        cpu.reset();

        prop_assert_eq!(cpu.pc(), vector);
        prop_assert_eq!(cpu.a(), 0);
        prop_assert_eq!(cpu.x(), 0);
        prop_assert_eq!(cpu.status(), 0);
        prop_assert_eq!(cpu.y(), y);
    }
}

//! Tests for the STA (Store Accumulator) instruction.
//!
//! Tests cover:
//! - All 7 addressing modes
//! - Status left untouched
//! - Each store opcode writing exactly one byte

use nes6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_sta_zero_page_basic() {
    let mut cpu = setup_cpu();

    // STA $10 (0x85 0x10)
    cpu.memory_mut().write(0x8000, 0x85);
    cpu.memory_mut().write(0x8001, 0x10);

    cpu.set_a(0x42);
    cpu.step();

    assert_eq!(cpu.memory().read(0x0010), 0x42);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_sta_does_not_affect_status() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x85);
    cpu.memory_mut().write(0x8001, 0x10);

    // A = 0 would set Z if STA touched flags
    cpu.set_a(0x00);
    cpu.set_status(0b1000_0001);
    cpu.step();

    assert_eq!(cpu.status(), 0b1000_0001);
}

#[test]
fn test_sta_zero_page_writes_only_one_byte() {
    let mut cpu = setup_cpu();

    // STA $10 must not also behave like STA $10,X
    cpu.memory_mut().write(0x8000, 0x85);
    cpu.memory_mut().write(0x8001, 0x10);

    cpu.set_a(0x42);
    cpu.set_x(0x05);
    cpu.step();

    assert_eq!(cpu.memory().read(0x0010), 0x42);
    assert_eq!(cpu.memory().read(0x0015), 0x00);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_sta_zero_page_x() {
    let mut cpu = setup_cpu();

    // STA $10,X (0x95 0x10)
    cpu.memory_mut().write(0x8000, 0x95);
    cpu.memory_mut().write(0x8001, 0x10);

    cpu.set_a(0x42);
    cpu.set_x(0x05);
    cpu.step();

    assert_eq!(cpu.memory().read(0x0015), 0x42);
    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_sta_zero_page_x_wraps() {
    let mut cpu = setup_cpu();

    // STA $F0,X with X = 0x20 writes $0010
    cpu.memory_mut().write(0x8000, 0x95);
    cpu.memory_mut().write(0x8001, 0xF0);

    cpu.set_a(0x37);
    cpu.set_x(0x20);
    cpu.step();

    assert_eq!(cpu.memory().read(0x0010), 0x37);
    assert_eq!(cpu.memory().read(0x0110), 0x00);
}

#[test]
fn test_sta_absolute() {
    let mut cpu = setup_cpu();

    // STA $0200
    cpu.memory_mut().write(0x8000, 0x8D);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x02);

    cpu.set_a(0xAB);
    cpu.step();

    assert_eq!(cpu.memory().read(0x0200), 0xAB);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_sta_absolute_x() {
    let mut cpu = setup_cpu();

    // STA $02F0,X with X = 0x20 writes $0310
    cpu.memory_mut().write(0x8000, 0x9D);
    cpu.memory_mut().write(0x8001, 0xF0);
    cpu.memory_mut().write(0x8002, 0x02);

    cpu.set_a(0xCD);
    cpu.set_x(0x20);
    cpu.step();

    assert_eq!(cpu.memory().read(0x0310), 0xCD);
}

#[test]
fn test_sta_absolute_y() {
    let mut cpu = setup_cpu();

    // STA $0200,Y
    cpu.memory_mut().write(0x8000, 0x99);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x02);

    cpu.set_a(0xEF);
    cpu.set_y(0x03);
    cpu.step();

    assert_eq!(cpu.memory().read(0x0203), 0xEF);
}

#[test]
fn test_sta_indirect_x() {
    let mut cpu = setup_cpu();

    // STA ($40,X) with X = 0x02: pointer at $0042/$0043 = $0300
    cpu.memory_mut().write(0x8000, 0x81);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write(0x0042, 0x00);
    cpu.memory_mut().write(0x0043, 0x03);

    cpu.set_a(0x5A);
    cpu.set_x(0x02);
    cpu.step();

    assert_eq!(cpu.memory().read(0x0300), 0x5A);
}

#[test]
fn test_sta_indirect_y() {
    let mut cpu = setup_cpu();

    // STA ($40),Y with Y = 0x10: pointer $0300, target $0310
    cpu.memory_mut().write(0x8000, 0x91);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write(0x0040, 0x00);
    cpu.memory_mut().write(0x0041, 0x03);

    cpu.set_a(0xA5);
    cpu.set_y(0x10);
    cpu.step();

    assert_eq!(cpu.memory().read(0x0310), 0xA5);
}

#[test]
fn test_sta_can_overwrite_program() {
    let mut cpu = setup_cpu();

    // STA $8003: self-modifying code is allowed
    cpu.memory_mut().write(0x8000, 0x8D);
    cpu.memory_mut().write(0x8001, 0x03);
    cpu.memory_mut().write(0x8002, 0x80);

    cpu.set_a(0xAA);
    cpu.step();

    assert_eq!(cpu.memory().read(0x8003), 0xAA);
}

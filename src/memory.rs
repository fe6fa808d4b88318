//! # Memory Bus
//!
//! The `MemoryBus` trait decouples the CPU from the storage behind it, and
//! `FlatMemory` provides the flat 64KB address space the NES core runs on.
//!
//! The bus follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Every 16-bit address is in range, so there is no bounds-checked variant
//! - Word accesses are little-endian and wrap from $FFFF to $0000

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementors supply `read` and `write`; the little-endian word helpers are
/// provided on top of them.
///
/// # Examples
///
/// ```
/// use nes6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write_word(0x1234, 0xBEEF);
/// assert_eq!(mem.read(0x1234), 0xEF); // low byte first
/// assert_eq!(mem.read(0x1235), 0xBE);
/// assert_eq!(mem.read_word(0x1234), 0xBEEF);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Writes land unconditionally, including
    /// inside the program region (self-modifying code is allowed).
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word from `addr` and `addr + 1`.
    ///
    /// The high byte address wraps, so reading at $FFFF takes the high byte
    /// from $0000.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes `value` little-endian: low byte at `addr`, high byte at
    /// `addr + 1` (wrapping at $FFFF).
    fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }
}

/// Flat 64KB memory covering every address from $0000 to $FFFF.
///
/// The buffer is exactly `MEMORY_SIZE` bytes and is indexed by a `u16`, so an
/// out-of-range access cannot be expressed.
///
/// # Examples
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x8000);
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; crate::MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; crate::MEMORY_SIZE]),
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

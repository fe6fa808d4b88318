//! # Status Register
//!
//! Only Zero (bit 1) and Negative (bit 7) are driven by this core. The other
//! bits are carried through untouched so that a status value written by a
//! host survives every instruction that does not document them.

use bitflags::bitflags;

bitflags! {
    /// Processor status register (`NV-BDIZC` layout).
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::Status;
    ///
    /// let mut status = Status::from_bits_retain(0b0000_0001); // carry set
    /// status.set(Status::ZERO, true);
    /// assert_eq!(status.bits(), 0b0000_0011);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Status: u8 {
        /// Set when the last result was zero.
        const ZERO = 0b0000_0010;
        /// Set when bit 7 of the last result was set.
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Applies the Zero/Negative rule for `value`, leaving every other bit
    /// as it was.
    pub fn update_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}

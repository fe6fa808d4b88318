//! # Register Transfer Instructions
//!
//! - TAX: Transfer Accumulator to X

use crate::{MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
///
/// Copies the accumulator into X and updates Z and N from the result.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.a;
    cpu.update_zn(cpu.x);
}

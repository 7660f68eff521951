//! VR4300 architectural state.
//!
//! This module contains the programmer-visible register state of the CPU:
//! the general-purpose and floating-point register files, the system control
//! coprocessor (CP0) bank, and the aggregate `RegisterFile` that also holds
//! HI, LO, the program counter and the LLBit.

/// System Control Coprocessor (CP0) register bank.
pub mod cp0;

/// Floating-Point Register file implementation.
pub mod fpr;

/// General-Purpose Register file implementation.
pub mod gpr;

/// Aggregate register file owned by the CPU.
pub mod regs;

pub use regs::RegisterFile;

/// Number of registers in each indexed bank (GPR, FPR, CP0).
pub const NUM_REGS: usize = 32;

/// Mask applied to every register index; indices are 5-bit fields.
pub const REG_INDEX_MASK: usize = NUM_REGS - 1;

/// Checks a register index and folds it into the bank.
///
/// Indices come from 5-bit instruction fields, so anything above 31 is a
/// caller bug: it panics in debug builds and wraps into the bank otherwise.
#[inline]
pub(crate) fn reg_index(idx: usize) -> usize {
    debug_assert!(idx < NUM_REGS, "register index {} out of range", idx);
    idx & REG_INDEX_MASK
}

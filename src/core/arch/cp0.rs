//! System Control Coprocessor (CP0) Register Bank.
//!
//! CP0 holds the TLB, exception and timer control registers. The core treats
//! it as an opaque bank of 32 32-bit slots; the named indices below document
//! the VR4300 register map but carry no special behaviour.

use super::{reg_index, NUM_REGS};

/// Programmable pointer into the TLB array.
pub const INDEX: usize = 0;
/// Pseudorandom pointer into the TLB array.
pub const RANDOM: usize = 1;
/// Low half of the TLB entry for even virtual pages.
pub const ENTRY_LO0: usize = 2;
/// Low half of the TLB entry for odd virtual pages.
pub const ENTRY_LO1: usize = 3;
/// Pointer to the kernel PTE table (32-bit mode).
pub const CONTEXT: usize = 4;
/// TLB page size mask.
pub const PAGE_MASK: usize = 5;
/// Number of wired TLB entries.
pub const WIRED: usize = 6;
/// Address of the most recent address error.
pub const BAD_VADDR: usize = 8;
/// Timer count.
pub const COUNT: usize = 9;
/// High half of the TLB entry, including ASID.
pub const ENTRY_HI: usize = 10;
/// Timer compare value.
pub const COMPARE: usize = 11;
/// Operating status.
pub const STATUS: usize = 12;
/// Cause of the last exception.
pub const CAUSE: usize = 13;
/// Exception program counter.
pub const EPC: usize = 14;
/// Processor revision identifier.
pub const PRID: usize = 15;
/// Memory system mode.
pub const CONFIG: usize = 16;
/// Load-linked instruction address.
pub const LL_ADDR: usize = 17;
/// Watchpoint address, low bits.
pub const WATCH_LO: usize = 18;
/// Watchpoint address, high bits.
pub const WATCH_HI: usize = 19;
/// Pointer to the kernel PTE table (64-bit mode).
pub const XCONTEXT: usize = 20;
/// Cache parity bits.
pub const PARITY_ERROR: usize = 26;
/// Cache error and status.
pub const CACHE_ERROR: usize = 27;
/// Cache tag, low.
pub const TAG_LO: usize = 28;
/// Cache tag, high.
pub const TAG_HI: usize = 29;
/// Error exception program counter.
pub const ERROR_EPC: usize = 30;

/// CP0 register bank.
#[derive(Clone, Debug, Default)]
pub struct Cp0 {
    regs: [u32; NUM_REGS],
}

impl Cp0 {
    /// Creates a zeroed CP0 bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the register at `idx`.
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[reg_index(idx)]
    }

    /// Writes the register at `idx`.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.regs[reg_index(idx)] = val;
    }
}

//! VR4300 General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file, containing
//! 32 64-bit registers (r0-r31). It enforces the architectural invariant that
//! register r0 is always hardwired to zero.

use super::{reg_index, NUM_REGS};

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers (r0-r31) used for integer
/// operations. Register r0 is hardwired to zero and cannot be modified.
#[derive(Clone, Debug, Default)]
pub struct Gpr {
    regs: [u64; NUM_REGS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index, 0-31.
    ///
    /// # Returns
    ///
    /// The 64-bit value stored in the specified register.
    /// Register r0 always returns 0 regardless of storage.
    pub fn read(&self, idx: usize) -> u64 {
        let idx = reg_index(idx);
        if idx == 0 {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to register r0 are silently ignored as r0 is hardwired to zero.
    pub fn write(&mut self, idx: usize, val: u64) {
        let idx = reg_index(idx);
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of all 32 registers, with r0 reported as zero.
    pub fn to_array(&self) -> [u64; NUM_REGS] {
        let mut out = self.regs;
        out[0] = 0;
        out
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    ///
    /// Displays registers in pairs (two per line) with hexadecimal formatting.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(2) {
            println!(
                "r{:<2}={:#018x} r{:<2}={:#018x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            );
        }
    }
}

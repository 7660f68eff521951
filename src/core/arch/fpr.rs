//! VR4300 Floating-Point Register File.
//!
//! Thirty-two 64-bit FPU registers (f0-f31). Unlike the GPR file there is no
//! hardwired register. The core stores values here but defines no floating
//! point arithmetic yet.

use super::{reg_index, NUM_REGS};

/// Floating-Point Register file.
#[derive(Clone, Debug, Default)]
pub struct Fpr {
    regs: [f64; NUM_REGS],
}

impl Fpr {
    /// Creates a new floating-point register file with all registers set to `0.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a floating-point register.
    pub fn read(&self, idx: usize) -> f64 {
        self.regs[reg_index(idx)]
    }

    /// Writes a floating-point register.
    pub fn write(&mut self, idx: usize, val: f64) {
        self.regs[reg_index(idx)] = val;
    }

    /// Reads the raw IEEE-754 bit pattern of a register.
    pub fn read_bits(&self, idx: usize) -> u64 {
        self.read(idx).to_bits()
    }

    /// Writes a raw IEEE-754 bit pattern into a register.
    pub fn write_bits(&mut self, idx: usize, bits: u64) {
        self.write(idx, f64::from_bits(bits));
    }
}

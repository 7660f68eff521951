//! Aggregate Register File.
//!
//! Bundles every register the integer pipeline touches. The general-purpose
//! file is private so that the r0 invariant can only be observed through
//! `read_gpr`/`write_gpr`; the remaining registers are plain storage.

use super::cp0::Cp0;
use super::fpr::Fpr;
use super::gpr::Gpr;

/// Complete architectural register state of the VR4300.
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    gpr: Gpr,
    /// Floating-point registers (storage only).
    pub fpr: Fpr,
    /// System control coprocessor registers.
    pub cp0: Cp0,
    /// High doubleword of multiply results, remainder of divides.
    pub hi: u64,
    /// Low doubleword of multiply results, quotient of divides.
    pub lo: u64,
    /// Address of the next instruction to fetch.
    pub pc: u64,
    /// Load-linked flag; stored but not yet consulted.
    pub ll_bit: bool,
    /// FPU implementation/revision register.
    pub fcr0: u32,
    /// FPU control/status register.
    pub fcr31: u32,
}

impl RegisterFile {
    /// Creates a register file with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register; r0 always reads as zero.
    pub fn read_gpr(&self, idx: usize) -> u64 {
        self.gpr.read(idx)
    }

    /// Writes a general-purpose register; writes to r0 are discarded.
    pub fn write_gpr(&mut self, idx: usize, val: u64) {
        self.gpr.write(idx, val);
    }

    /// Reads a floating-point register.
    pub fn read_fpr(&self, idx: usize) -> f64 {
        self.fpr.read(idx)
    }

    /// Writes a floating-point register.
    pub fn write_fpr(&mut self, idx: usize, val: f64) {
        self.fpr.write(idx, val);
    }

    /// Reads a CP0 register.
    pub fn read_cp0(&self, idx: usize) -> u32 {
        self.cp0.read(idx)
    }

    /// Writes a CP0 register.
    pub fn write_cp0(&mut self, idx: usize, val: u32) {
        self.cp0.write(idx, val);
    }

    /// Returns the general-purpose registers as an array (r0 reported as zero).
    pub fn gpr_array(&self) -> [u64; super::NUM_REGS] {
        self.gpr.to_array()
    }

    /// Dumps PC, HI, LO and the general-purpose registers to stdout.
    pub fn dump(&self) {
        println!(
            "pc={:#018x} hi={:#018x} lo={:#018x} llbit={}",
            self.pc, self.hi, self.lo, self.ll_bit as u8
        );
        self.gpr.dump();
    }
}

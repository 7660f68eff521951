//! CPU Facade.
//!
//! `Cpu` owns the register file, the pipeline and the bus, and exposes the
//! stepping interface used by the CLI and by embedders.

use serde::Serialize;

use crate::common::{Endianness, Result};
use crate::config::Config;
use crate::core::arch::{RegisterFile, NUM_REGS};
use crate::core::pipeline::Pipeline;
use crate::soc::Bus;
use crate::stats::SimStats;

/// A VR4300 attached to a bus.
pub struct Cpu<B: Bus> {
    /// Architectural registers.
    pub regs: RegisterFile,
    /// Pipeline latches and counters.
    pub pipeline: Pipeline,
    /// Memory and devices.
    pub bus: B,
}

/// Serializable view of the integer register state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CpuSnapshot {
    pub pc: u64,
    pub hi: u64,
    pub lo: u64,
    pub ll_bit: bool,
    pub gpr: [u64; NUM_REGS],
}

impl<B: Bus> Cpu<B> {
    /// Creates a CPU with cleared registers and an empty pipeline; PC starts at 0.
    pub fn new(bus: B) -> Self {
        Self {
            regs: RegisterFile::new(),
            pipeline: Pipeline::new(),
            bus,
        }
    }

    /// Creates a CPU using the start PC and trace setting from `config`.
    pub fn with_config(bus: B, config: &Config) -> Self {
        let mut cpu = Self::new(bus);
        cpu.regs.pc = config.general.start_pc_val();
        cpu.pipeline.trace = cfg!(feature = "always-trace") || config.general.trace_instructions;
        cpu
    }

    /// Byte order used for every bus access. Only big-endian is supported.
    pub fn endianness(&self) -> Endianness {
        Endianness::Big
    }

    /// Advances the pipeline by exactly one cycle.
    pub fn step(&mut self) -> Result<()> {
        let endian = self.endianness();
        self.pipeline.step(endian, &mut self.regs, &mut self.bus)
    }

    /// Steps `cycles` times, stopping at the first fatal error.
    pub fn run_for_cycles(&mut self, cycles: u64) -> Result<()> {
        for _ in 0..cycles {
            self.step()?;
        }
        Ok(())
    }

    /// Simulation counters.
    pub fn stats(&self) -> &SimStats {
        &self.pipeline.stats
    }

    /// Captures PC, HI, LO, LLBit and the general-purpose registers.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            pc: self.regs.pc,
            hi: self.regs.hi,
            lo: self.regs.lo,
            ll_bit: self.regs.ll_bit,
            gpr: self.regs.gpr_array(),
        }
    }

    /// Prints the register file and the pipeline latches to stdout.
    pub fn dump_state(&self) {
        println!("--- CPU state ---");
        self.regs.dump();
        let p = &self.pipeline;
        println!("IC latch: {:x?}", p.ic_latch);
        println!("RF latch: {:x?}", p.rf_latch);
        println!("EX latch: {:x?}", p.ex_latch);
        println!("DC latch: {:x?}", p.dc_latch);
    }
}

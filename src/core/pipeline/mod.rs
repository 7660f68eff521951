//! VR4300 pipeline controller.
//!
//! The five stages run once per call to [`Pipeline::step`], in reverse
//! dependency order:
//!
//! 1. **WB** (write-back) commits the data-cache latch to the register file.
//! 2. **DC** (data cache) performs the memory read of a load.
//! 3. **EX** (execute) decodes and executes the fetched word.
//! 4. **RF** (register fetch) reads the instruction word at the latched address.
//! 5. **IC** (instruction cache) latches the PC and advances it by one word.
//!
//! Running the consumers before the producers means every stage only ever
//! sees latch values written during an earlier cycle.

/// Inter-stage latch payloads.
pub mod latches;

/// Operation and destination tags.
pub mod signals;

/// Stage implementations.
pub mod stages;

use tracing::trace;

use crate::common::{Endianness, Result};
use crate::core::arch::RegisterFile;
use crate::soc::Bus;
use crate::stats::SimStats;

pub use latches::{ExecResult, FetchedWord};
pub use signals::{Dest, Op, OpClass};

/// Pipeline latches and per-pipeline bookkeeping.
#[derive(Debug, Default)]
pub struct Pipeline {
    /// IC -> RF: address of the instruction to read.
    pub ic_latch: Option<u64>,
    /// RF -> EX: fetched instruction word.
    pub rf_latch: Option<FetchedWord>,
    /// EX -> DC: execution result.
    pub ex_latch: Option<ExecResult>,
    /// DC -> WB: result ready to commit.
    pub dc_latch: Option<ExecResult>,
    /// Emit a trace line per active stage.
    pub trace: bool,
    /// Cycle and instruction counters.
    pub stats: SimStats,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances every stage by one cycle.
    ///
    /// # Errors
    ///
    /// Propagates any fatal condition raised by the execute stage. Stages
    /// after EX do not run in the failing cycle.
    pub fn step<B: Bus + ?Sized>(
        &mut self,
        endian: Endianness,
        regs: &mut RegisterFile,
        bus: &mut B,
    ) -> Result<()> {
        self.stats.cycles += 1;
        if self.trace {
            trace!("cycle {} pc={:#x}", self.stats.cycles, regs.pc);
        }

        stages::wb_stage(self, regs);
        stages::dc_stage(self, endian, bus);
        stages::ex_stage(self, regs)?;
        stages::rf_stage(self, endian, bus);
        stages::ic_stage(self, &mut regs.pc);
        Ok(())
    }

    /// Empties every latch.
    pub fn flush(&mut self) {
        self.ic_latch = None;
        self.rf_latch = None;
        self.ex_latch = None;
        self.dc_latch = None;
    }

    /// Returns `true` when no latch holds a value.
    pub fn is_empty(&self) -> bool {
        self.ic_latch.is_none()
            && self.rf_latch.is_none()
            && self.ex_latch.is_none()
            && self.dc_latch.is_none()
    }
}

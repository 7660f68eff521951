//! VR4300 CPU core.
//!
//! Architectural state, the five-stage pipeline, the integer execution unit
//! and the `Cpu` facade that ties them to a bus.

/// Register files and architectural state.
pub mod arch;

/// CPU facade.
pub mod cpu;

/// Pipeline controller, latches and stages.
pub mod pipeline;

/// Execution and load units.
pub mod units;

pub use cpu::{Cpu, CpuSnapshot};

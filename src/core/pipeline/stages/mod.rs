//! Pipeline stage implementations.
//!
//! Contains the five stages of the VR4300 pipeline:
//! - IC: latches the program counter and advances it
//! - RF: reads the instruction word from the bus
//! - EX: decodes and executes the instruction
//! - DC: performs load accesses
//! - WB: commits results to the register file

/// Data-cache stage implementation.
pub mod data_cache;

/// Execute stage implementation.
pub mod execute;

/// Instruction-cache fetch stage implementation.
pub mod instruction_fetch;

/// Register-fetch stage implementation.
pub mod register_fetch;

/// Write-back stage implementation.
pub mod write_back;

pub use data_cache::dc_stage;
pub use execute::ex_stage;
pub use instruction_fetch::ic_stage;
pub use register_fetch::rf_stage;
pub use write_back::wb_stage;

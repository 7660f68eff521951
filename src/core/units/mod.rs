//! Functional units used by the execute and data-cache stages.

/// Integer execution unit: one handler per implemented instruction.
pub mod alu;

/// Load helpers for the data-cache stage.
pub mod lsu;

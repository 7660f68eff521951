//! System-side components the CPU core talks to.
//!
//! The core only depends on the `Bus` trait. `Memory` is a flat RAM that
//! implements it, used by the CLI and as the test double for the pipeline.

/// Flat RAM implementing the bus contract.
pub mod memory;

/// The bus contract consumed by the pipeline.
pub mod traits;

pub use memory::Memory;
pub use traits::Bus;

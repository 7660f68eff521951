//! Memory devices.

/// Flat byte-addressed RAM.
pub mod ram;

pub use ram::Memory;

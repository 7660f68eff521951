//! Common utilities and types used throughout the VR4300 emulator.
//!
//! This module provides the byte-order and access-width vocabulary shared by
//! the bus and the pipeline, and the fatal error taxonomy of the CPU core.

/// Bus access descriptors (byte order, access width).
pub mod data;

/// Error types raised by the CPU core.
pub mod error;

pub use data::{AccessWidth, Endianness};
pub use error::{CpuError, Result};

//! VR4300 (R4300i) CPU Emulator Library.
//!
//! This crate emulates the 64-bit MIPS-III CPU of the Nintendo 64: it fetches
//! instruction words over a bus, decodes them, executes them against a
//! register file and models timing with the five-stage VR4300 pipeline.
//!
//! # Architecture
//!
//! * **Core**: 5-stage in-order pipeline (IC, RF, EX, DC, WB) advanced once per cycle.
//! * **Bus**: the core reaches memory only through the `soc::Bus` trait.
//! * **Memory**: a flat big-endian RAM for running code images.
//!
//! # Modules
//!
//! * `common`: Byte order, access widths and error handling.
//! * `config`: Configuration loading and parsing.
//! * `core`: CPU core implementation.
//! * `isa`: Instruction decoding and opcode tables.
//! * `sim`: Binary loaders.
//! * `soc`: Bus contract and RAM.
//! * `stats`: Performance statistics collection.

/// Shared types, constants and error handling.
pub mod common;

/// Configuration system for memory and pipeline settings.
///
/// Loads and parses TOML configuration files.
pub mod config;

/// CPU core implementation including pipeline stages and execution units.
///
/// Implements the 5-stage in-order pipeline, the register files and the
/// `Cpu` facade.
pub mod core;

/// Instruction Set Architecture definitions and decoders.
pub mod isa;

/// Binary loaders.
pub mod sim;

/// Bus contract and memory implementation.
pub mod soc;

/// Performance statistics collection and reporting.
pub mod stats;

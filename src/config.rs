//! Emulator configuration.
//!
//! Loaded from a TOML file. Every section and field is optional; addresses
//! and sizes are hex strings that fall back to their default when they do
//! not parse.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::soc::memory::ram::DEFAULT_RAM_SIZE;

const DEFAULT_START_PC: u64 = 0;
const DEFAULT_LOAD_ADDR: u64 = 0;
const DEFAULT_MAX_CYCLES: u64 = 1000;

/// Failure to obtain a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} = {value:#x} does not fit the 32-bit physical bus")]
    AddressOutOfRange { field: &'static str, value: u64 },
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace_instructions: bool,
    #[serde(default = "default_start_pc")]
    pub start_pc: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: default_start_pc(),
        }
    }
}

impl GeneralConfig {
    pub fn start_pc_val(&self) -> u64 {
        parse_hex(&self.start_pc, DEFAULT_START_PC)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MemoryConfig {
    #[serde(default = "default_ram_size")]
    pub ram_size: String,
    #[serde(default = "default_load_addr")]
    pub load_addr: String,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_size: default_ram_size(),
            load_addr: default_load_addr(),
        }
    }
}

impl MemoryConfig {
    pub fn ram_size_val(&self) -> usize {
        parse_hex(&self.ram_size, DEFAULT_RAM_SIZE as u64) as usize
    }

    pub fn load_addr_val(&self) -> u64 {
        parse_hex(&self.load_addr, DEFAULT_LOAD_ADDR)
    }

    /// Load address as a bus address.
    pub fn load_addr_bus(&self) -> Result<u32, ConfigError> {
        let value = self.load_addr_val();
        u32::try_from(value).map_err(|_| ConfigError::AddressOutOfRange {
            field: "memory.load_addr",
            value,
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PipelineConfig {
    #[serde(default = "default_max_cycles")]
    pub max_cycles: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_cycles: default_max_cycles(),
        }
    }
}

fn parse_hex(s: &str, default: u64) -> u64 {
    let s = s.trim();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u64::from_str_radix(&s.replace('_', ""), 16).unwrap_or(default)
}

fn default_start_pc() -> String {
    format!("{:#x}", DEFAULT_START_PC)
}

fn default_ram_size() -> String {
    format!("{:#x}", DEFAULT_RAM_SIZE)
}

fn default_load_addr() -> String {
    format!("{:#x}", DEFAULT_LOAD_ADDR)
}

fn default_max_cycles() -> u64 {
    DEFAULT_MAX_CYCLES
}

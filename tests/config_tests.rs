//! Tests for configuration parsing.

use vr4300_emulator::config::{Config, ConfigError};
use vr4300_emulator::soc::memory::ram::DEFAULT_RAM_SIZE;

/// Tests the built-in defaults.
#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.start_pc_val(), 0);
    assert_eq!(config.memory.ram_size_val(), DEFAULT_RAM_SIZE);
    assert_eq!(config.memory.load_addr_val(), 0);
    assert_eq!(config.pipeline.max_cycles, 1000);
}

/// Tests that an empty document yields the defaults.
#[test]
fn test_config_empty_document() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config.memory.ram_size_val(), DEFAULT_RAM_SIZE);
    assert_eq!(config.pipeline.max_cycles, 1000);
}

/// Tests a fully specified document.
#[test]
fn test_config_full() {
    let text = r#"
[general]
trace_instructions = true
start_pc = "0x1000"

[memory]
ram_size = "0x40_0000"
load_addr = "0X1000"

[pipeline]
max_cycles = 42
"#;
    let config = Config::from_toml(text).unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.start_pc_val(), 0x1000);
    assert_eq!(config.memory.ram_size_val(), 0x40_0000);
    assert_eq!(config.memory.load_addr_val(), 0x1000);
    assert_eq!(config.pipeline.max_cycles, 42);
}

/// Tests that an unparsable hex value falls back to its default.
#[test]
fn test_config_bad_hex_falls_back() {
    let config = Config::from_toml("[memory]\nram_size = \"lots\"\n").unwrap();
    assert_eq!(config.memory.ram_size_val(), DEFAULT_RAM_SIZE);
}

/// Tests that malformed TOML is rejected.
#[test]
fn test_config_parse_error() {
    assert!(Config::from_toml("[pipeline]\nmax_cycles = \"many\"\n").is_err());
}

/// Tests that a missing file reports an I/O error.
#[test]
fn test_config_missing_file() {
    assert!(Config::load("does/not/exist.toml").is_err());
}

/// Tests that the shipped configuration parses.
#[test]
fn test_config_shipped_default() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/default.toml");
    let config = Config::load(path).unwrap();
    assert_eq!(config.memory.ram_size_val(), DEFAULT_RAM_SIZE);
}

/// Tests that a load address beyond the 32-bit bus is rejected.
#[test]
fn test_config_load_addr_out_of_range() {
    let config = Config::from_toml("[memory]\nload_addr = \"0x1_0000_0000\"\n").unwrap();
    assert_eq!(config.memory.load_addr_val(), 0x1_0000_0000);
    assert!(matches!(
        config.memory.load_addr_bus(),
        Err(ConfigError::AddressOutOfRange {
            field: "memory.load_addr",
            value: 0x1_0000_0000,
        })
    ));
}

/// Tests that an in-range load address converts unchanged.
#[test]
fn test_config_load_addr_in_range() {
    let config = Config::from_toml("[memory]\nload_addr = \"0xFFFF_FFFC\"\n").unwrap();
    assert!(matches!(config.memory.load_addr_bus(), Ok(0xFFFF_FFFC)));
}

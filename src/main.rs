//! VR4300 Emulator CLI.
//!
//! Loads a raw big-endian code image into RAM, runs the CPU for a number of
//! cycles and prints the resulting register state and statistics.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vr4300_emulator::config::Config;
use vr4300_emulator::core::Cpu;
use vr4300_emulator::sim::loader;
use vr4300_emulator::soc::Memory;

/// Command-line arguments for the VR4300 emulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "VR4300 Pipeline Emulator")]
struct Args {
    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,

    #[arg(short, long)]
    file: String,

    /// Cycles to run; overrides `pipeline.max_cycles`.
    #[arg(short = 'n', long)]
    cycles: Option<u64>,

    /// Print the final state as JSON instead of a register dump.
    #[arg(long)]
    json: bool,
}

fn init_tracing(trace: bool) {
    let default = if trace { "trace" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[!] {} ({}); using defaults", e, args.config);
            Config::default()
        }
    };

    init_tracing(cfg!(feature = "always-trace") || config.general.trace_instructions);

    let cycles = args.cycles.unwrap_or(config.pipeline.max_cycles);
    let load_addr = config.memory.load_addr_val();

    println!("Global Configuration");
    println!("--------------------");
    println!(
        "  Trace Instructions: {}",
        config.general.trace_instructions
    );
    println!("  RAM Size:           {:#x}", config.memory.ram_size_val());
    println!("  Load Address:       {:#x}", load_addr);
    println!("  Start PC:           {:#x}", config.general.start_pc_val());
    println!("  Cycles:             {}", cycles);
    println!("--------------------");

    let image = match loader::load_binary(&args.file) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("\n[!] FATAL: Could not read file '{}': {}", args.file, e);
            process::exit(1);
        }
    };

    let bus_addr = match config.memory.load_addr_bus() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("\n[!] FATAL: {}", e);
            process::exit(1);
        }
    };

    let mut ram = Memory::new(config.memory.ram_size_val());
    loader::load_into(&mut ram, &image, bus_addr);

    let mut cpu = Cpu::with_config(ram, &config);

    let outcome = cpu.run_for_cycles(cycles);

    if args.json {
        let report = serde_json::json!({
            "state": cpu.snapshot(),
            "stats": cpu.stats(),
            "error": outcome.as_ref().err().map(|e| e.to_string()),
        });
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("[!] failed to serialize state: {}", e),
        }
    }

    if let Err(e) = outcome {
        eprintln!("\n[!] FATAL: {}", e);
        if !args.json {
            cpu.dump_state();
            cpu.stats().print();
        }
        process::exit(1);
    }

    if !args.json {
        cpu.dump_state();
        cpu.stats().print();
    }
}

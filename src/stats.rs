//! Simulation statistics collection and reporting.
//!
//! Tracks cycle counts, executed instruction counts per class and register
//! commits.

use std::time::Instant;

use serde::Serialize;

/// Simulation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    pub cycles: u64,
    pub instructions_executed: u64,

    pub inst_alu: u64,
    pub inst_shift: u64,
    pub inst_load: u64,
    pub inst_jump: u64,
    pub inst_muldiv: u64,
    pub inst_hilo: u64,

    pub writebacks: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_executed: 0,
            inst_alu: 0,
            inst_shift: 0,
            inst_load: 0,
            inst_jump: 0,
            inst_muldiv: 0,
            inst_hilo: 0,
            writebacks: 0,
        }
    }
}

impl SimStats {
    /// Instructions executed per cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_executed as f64 / self.cycles as f64
        }
    }

    /// Prints a formatted summary of all simulation statistics.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let khz = if seconds > 0.0 {
            (self.cycles as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        println!("\n==========================================================");
        println!("VR4300 SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_freq                 {:.2} kHz", khz);
        println!("sim_insts                {}", self.instructions_executed);
        println!("sim_ipc                  {:.4}", self.ipc());
        println!("----------------------------------------------------------");
        println!("inst_alu                 {}", self.inst_alu);
        println!("inst_shift               {}", self.inst_shift);
        println!("inst_load                {}", self.inst_load);
        println!("inst_jump                {}", self.inst_jump);
        println!("inst_muldiv              {}", self.inst_muldiv);
        println!("inst_hilo                {}", self.inst_hilo);
        println!("writebacks               {}", self.writebacks);
        println!("==========================================================");
    }
}

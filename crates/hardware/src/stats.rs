//! Simulation statistics collection and reporting.

/// Counters collected by the datapath while it runs.
#[derive(Clone, Debug, Default)]
pub struct SimStats {
    /// Clock levels presented to the CPU (every `write` call).
    pub ticks: u64,
    /// Rising edges detected (logical cycles).
    pub rising_edges: u64,
    /// Register-file writes committed.
    pub register_writes: u64,
    /// Data-memory writes committed.
    pub memory_writes: u64,
    /// Branches taken by the fetch stage.
    pub branches_taken: u64,
}

impl SimStats {
    /// Prints a summary report to stdout.
    pub fn print(&self) {
        println!("\n=========================================");
        println!("[Simulation]");
        println!("  Clock levels:      {}", self.ticks);
        println!("  Rising edges:      {}", self.rising_edges);
        println!("\n[Datapath]");
        println!("  Register writes:   {}", self.register_writes);
        println!("  Memory writes:     {}", self.memory_writes);
        println!("  Branches taken:    {}", self.branches_taken);
    }
}

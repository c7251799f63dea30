//! Simulator: owns the CPU and drives its clock.
//!
//! The driver toggles the clock explicitly — `0 → 1 → 0` per logical cycle
//! for one clean rising edge — and exposes an observable snapshot after
//! every step for external inspection.

use std::str::FromStr;

use tracing::debug;

use crate::common::bit::Bit;
use crate::common::error::LogicError;
use crate::common::vector::BitVector;
use crate::config::Config;
use crate::core::Cpu;

/// Observable CPU state after a step.
#[derive(Clone, Debug)]
pub struct CpuState {
    /// Current program counter.
    pub pc: BitVector,
    /// Instruction latched at the Fetch → Decode boundary.
    pub instruction: BitVector,
    /// ALU result latched at the Execute → Memory boundary.
    pub alu_result: BitVector,
    /// Value staged for the next register-file write.
    pub write_data: BitVector,
    /// Clock levels presented so far.
    pub ticks: u64,
}

/// Top-level simulator: CPU plus clock driving.
#[derive(Debug)]
pub struct Simulator {
    /// The CPU under simulation.
    pub cpu: Cpu,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Simulator {
    /// Creates a simulator with a freshly zeroed CPU.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
        }
    }

    /// Parses and loads a program into instruction memory.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::InvalidBitSymbol`] for malformed words and
    /// [`LogicError::SelectorOutOfRange`] for oversized programs.
    pub fn load_program(&mut self, words: &[&str]) -> Result<(), LogicError> {
        let program = words
            .iter()
            .map(|word| BitVector::from_str(word))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(words = program.len(), "program loaded");
        self.cpu.set_instructions(&program)
    }

    /// Parses and loads initial register contents.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::InvalidBitSymbol`] for malformed words and
    /// [`LogicError::SelectorOutOfRange`] for too many values.
    pub fn load_registers(&mut self, words: &[&str]) -> Result<(), LogicError> {
        let values = words
            .iter()
            .map(|word| BitVector::from_str(word))
            .collect::<Result<Vec<_>, _>>()?;
        self.cpu.set_register_data(&values)
    }

    /// Advances the CPU by one clock level and snapshots it.
    ///
    /// # Errors
    ///
    /// Propagates the CPU's stage errors.
    pub fn step(&mut self, clock: Bit) -> Result<CpuState, LogicError> {
        self.cpu.write(clock)?;
        Ok(self.state())
    }

    /// Drives one full logical cycle: `0 → 1 → 0`.
    ///
    /// # Errors
    ///
    /// Propagates the CPU's stage errors.
    pub fn cycle(&mut self) -> Result<CpuState, LogicError> {
        let _ = self.step(Bit::Zero)?;
        let _ = self.step(Bit::One)?;
        self.step(Bit::Zero)
    }

    /// Runs `cycles` full logical cycles.
    ///
    /// # Errors
    ///
    /// Propagates the CPU's stage errors from the failing cycle.
    pub fn run(&mut self, cycles: usize) -> Result<CpuState, LogicError> {
        for _ in 0..cycles {
            let _ = self.cycle()?;
        }
        Ok(self.state())
    }

    /// Snapshots the observable CPU state.
    pub fn state(&self) -> CpuState {
        CpuState {
            pc: self.cpu.pc().clone(),
            instruction: self.cpu.fetch_output().instruction.clone(),
            alu_result: self.cpu.execute_output().alu_result.clone(),
            write_data: self.cpu.writeback_output().write_data.clone(),
            ticks: self.cpu.stats.ticks,
        }
    }
}

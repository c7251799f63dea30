//! Digital-logic simulation engine.
//!
//! This crate evaluates combinational boolean circuits over fixed-width bit
//! vectors, models clocked sequential state, and composes both into a small
//! pipelined CPU datapath:
//! 1. **Common:** the [`common::Bit`] symbol, fixed-width
//!    [`common::BitVector`], constants, and the error taxonomy.
//! 2. **Logic:** pure combinational circuits — gates, adders, comparison,
//!    shifts, mux/demux, and the truth-table harness.
//! 3. **State:** edge-triggered sequential elements — flip-flops, registers,
//!    and RAM with asynchronous reads and clocked writes.
//! 4. **Core:** the 5-stage load/store/ALU pipeline (Fetch, Decode, Execute,
//!    Memory, Writeback) and the single-cycle accumulator machine.
//! 5. **Simulation:** configuration, the clock-driving simulator, and
//!    statistics.
//!
//! The simulation is single-threaded and discrete: one `write` call per
//! clock level, one clean rising edge per logical `0 → 1 → 0` cycle, and no
//! timing or propagation-delay modeling.

/// Common types and constants (bits, vectors, errors).
pub mod common;
/// Simulator configuration.
pub mod config;
/// CPU datapath (pipeline, units, accumulator machine).
pub mod core;
/// Instruction encoding (field layout, opcode/funct constants).
pub mod isa;
/// Combinational circuits (gates, arithmetic, selection, harness).
pub mod logic;
/// Simulation driving.
pub mod sim;
/// Sequential elements (clock contract, flip-flops, registers, RAM).
pub mod state;
/// Simulation statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; owns the pipeline latches, memories, and register file.
pub use crate::core::Cpu;
/// Clock-driving simulator wrapping a [`Cpu`].
pub use crate::sim::Simulator;

pub use crate::common::{Bit, BitVector, LogicError};

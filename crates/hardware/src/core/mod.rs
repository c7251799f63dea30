//! The CPU datapath.
//!
//! [`Cpu`] wires the combinational circuits, sequential elements, and
//! storage into a 5-stage load/store/ALU pipeline driven by one external
//! clock signal. It owns every component exclusively and is the sole caller
//! of each component's `write`. There is no hazard detection or forwarding:
//! the pipeline is a plain in-order chain of latches, and a taken branch
//! leaves one delay-slot instruction in flight.

/// The single-cycle accumulator machine.
pub mod accumulator;

/// Pipeline latches, signals, and stages.
pub mod pipeline;

/// Functional units.
pub mod units;

use crate::common::bit::Bit;
use crate::common::constants::{REGISTER_COUNT, WORD_WIDTH};
use crate::common::error::LogicError;
use crate::common::vector::BitVector;
use crate::config::Config;
use crate::state::clock::EdgeDetector;
use crate::state::flipflop::DFlipFlop;
use crate::state::ram::{RegisterFileRam, SingleReadRam};
use crate::stats::SimStats;
use pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry, PipelineLatch, WbEntry};
use pipeline::stages::{decode_stage, execute_stage, fetch_stage, memory_stage, writeback_stage};

/// The pipelined CPU: program counter, instruction memory, data memory,
/// register file, and the chain of pipeline latches connecting
/// Fetch → Decode → Execute → Memory → Writeback.
#[derive(Debug)]
pub struct Cpu {
    pub(crate) instruction_memory: SingleReadRam,
    pub(crate) data_memory: SingleReadRam,
    pub(crate) registers: RegisterFileRam,
    pub(crate) pc: DFlipFlop,

    pub(crate) if_id: PipelineLatch<IfIdEntry>,
    pub(crate) id_ex: PipelineLatch<IdExEntry>,
    pub(crate) ex_mem: PipelineLatch<ExMemEntry>,
    pub(crate) mem_wb: PipelineLatch<MemWbEntry>,
    pub(crate) wb: PipelineLatch<WbEntry>,

    /// Simulation counters.
    pub stats: SimStats,
    tick_edge: EdgeDetector,
}

impl Cpu {
    /// Creates a CPU with zeroed state sized per the configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            instruction_memory: SingleReadRam::new(WORD_WIDTH, config.instruction_slots),
            data_memory: SingleReadRam::new(WORD_WIDTH, config.data_slots),
            registers: RegisterFileRam::new(WORD_WIDTH, REGISTER_COUNT),
            pc: DFlipFlop::new(WORD_WIDTH),
            if_id: PipelineLatch::default(),
            id_ex: PipelineLatch::default(),
            ex_mem: PipelineLatch::default(),
            mem_wb: PipelineLatch::default(),
            wb: PipelineLatch::default(),
            stats: SimStats::default(),
            tick_edge: EdgeDetector::new(),
        }
    }

    /// Advances the CPU by one clock level.
    ///
    /// Stages evaluate in reverse pipeline order — Writeback, Memory,
    /// Execute, Decode, Fetch — within this single call. The simulation
    /// driver produces one clean rising edge per logical cycle by stepping
    /// the clock `0 → 1 → 0`.
    ///
    /// # Errors
    ///
    /// Propagates the first stage failure: an unsupported opcode or funct
    /// encoding, an out-of-range memory address, or a malformed instruction
    /// word. Nothing is retried; the failing tick leaves the already-updated
    /// components as they are.
    pub fn write(&mut self, clock: Bit) -> Result<(), LogicError> {
        let rising = self.tick_edge.sense(clock);
        self.stats.ticks += 1;
        if rising {
            self.stats.rising_edges += 1;
        }

        writeback_stage(self, clock);
        memory_stage(self, clock, rising)?;
        execute_stage(self, clock)?;
        decode_stage(self, clock, rising)?;
        fetch_stage(self, clock, rising)?;
        Ok(())
    }

    /// Bulk-loads the instruction memory starting at slot zero.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::SelectorOutOfRange`] when the program has more
    /// words than the instruction memory has slots.
    pub fn set_instructions(&mut self, program: &[BitVector]) -> Result<(), LogicError> {
        self.instruction_memory.load(program)
    }

    /// Bulk-loads the register file starting at register zero.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::SelectorOutOfRange`] when more values are
    /// supplied than there are registers.
    pub fn set_register_data(&mut self, values: &[BitVector]) -> Result<(), LogicError> {
        self.registers.load(values)
    }

    /// Current program counter.
    pub const fn pc(&self) -> &BitVector {
        self.pc.q()
    }

    /// Register contents, if the number is in range.
    pub fn register(&self, number: usize) -> Option<&BitVector> {
        self.registers.row(number)
    }

    /// Data-memory row contents, if the address is in range.
    pub fn memory_word(&self, address: usize) -> Option<&BitVector> {
        self.data_memory.row(address)
    }

    /// The Fetch → Decode record latched at the last rising edge.
    pub const fn fetch_output(&self) -> &IfIdEntry {
        self.if_id.current()
    }

    /// The Decode → Execute record latched at the last rising edge.
    pub const fn decode_output(&self) -> &IdExEntry {
        self.id_ex.current()
    }

    /// The Execute → Memory record latched at the last rising edge.
    pub const fn execute_output(&self) -> &ExMemEntry {
        self.ex_mem.current()
    }

    /// The Memory → Writeback record latched at the last rising edge.
    pub const fn memory_output(&self) -> &MemWbEntry {
        self.mem_wb.current()
    }

    /// The staged register-file write the next Decode call applies.
    pub const fn writeback_output(&self) -> &WbEntry {
        self.wb.current()
    }
}

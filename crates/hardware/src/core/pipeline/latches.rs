//! Pipeline latch structures for inter-stage communication.
//!
//! Each stage boundary carries a fixed, named record of control and data
//! signals — constructed by field name, never by argument position — held
//! in a clocked [`PipelineLatch`]. On a rising edge the latch overwrites its
//! current record with the staged next one; between edges it holds.
//!
//! Every default record carries correctly-sized all-zero vectors and an
//! all-low control word, so a cold pipeline asserts no write enables.

use crate::common::bit::Bit;
use crate::common::constants::{FUNCT_WIDTH, REGISTER_WIDTH, WORD_WIDTH};
use crate::common::vector::BitVector;
use crate::core::pipeline::signals::ControlSignals;
use crate::state::clock::EdgeDetector;

/// Clocked latch holding one stage-boundary record.
#[derive(Clone, Debug, Default)]
pub struct PipelineLatch<T> {
    edge: EdgeDetector,
    current: T,
}

impl<T> PipelineLatch<T> {
    /// Clocks the latch: on a rising edge, the current record is replaced
    /// by `next`; otherwise `next` is discarded and the record holds.
    pub fn write(&mut self, next: T, clock: Bit) {
        if self.edge.sense(clock) {
            self.current = next;
        }
    }

    /// The record latched at the last rising edge.
    pub const fn current(&self) -> &T {
        &self.current
    }
}

/// Fetch → Decode boundary.
#[derive(Clone, Debug)]
pub struct IfIdEntry {
    /// Program counter of the fetched instruction slot.
    pub pc: BitVector,
    /// 32-bit instruction word.
    pub instruction: BitVector,
}

impl Default for IfIdEntry {
    fn default() -> Self {
        Self {
            pc: BitVector::zeros(WORD_WIDTH),
            instruction: BitVector::zeros(WORD_WIDTH),
        }
    }
}

/// Decode → Execute boundary.
#[derive(Clone, Debug)]
pub struct IdExEntry {
    /// Program counter, carried for branch-target arithmetic.
    pub pc: BitVector,
    /// Control word decoded from the opcode.
    pub ctrl: ControlSignals,
    /// First register-file read port value.
    pub read_data1: BitVector,
    /// Second register-file read port value.
    pub read_data2: BitVector,
    /// Sign-extended immediate.
    pub immediate: BitVector,
    /// Function field for the ALU control.
    pub funct: BitVector,
    /// Destination register selected in Decode (`rt` or `rd` per
    /// `reg_dst`).
    pub write_reg: BitVector,
}

impl Default for IdExEntry {
    fn default() -> Self {
        Self {
            pc: BitVector::zeros(WORD_WIDTH),
            ctrl: ControlSignals::default(),
            read_data1: BitVector::zeros(WORD_WIDTH),
            read_data2: BitVector::zeros(WORD_WIDTH),
            immediate: BitVector::zeros(WORD_WIDTH),
            funct: BitVector::zeros(FUNCT_WIDTH),
            write_reg: BitVector::zeros(REGISTER_WIDTH),
        }
    }
}

/// Execute → Memory boundary.
#[derive(Clone, Debug)]
pub struct ExMemEntry {
    /// Candidate branch target (`pc + (immediate << 2)`).
    pub branch_target: BitVector,
    /// ALU zero flag; with `ctrl.branch` it selects the next PC.
    pub zero: Bit,
    /// ALU result (also the data-memory address).
    pub alu_result: BitVector,
    /// Store data (second register value).
    pub write_data: BitVector,
    /// Destination register.
    pub write_reg: BitVector,
    /// Control word pass-through.
    pub ctrl: ControlSignals,
}

impl Default for ExMemEntry {
    fn default() -> Self {
        Self {
            branch_target: BitVector::zeros(WORD_WIDTH),
            zero: Bit::Zero,
            alu_result: BitVector::zeros(WORD_WIDTH),
            write_data: BitVector::zeros(WORD_WIDTH),
            write_reg: BitVector::zeros(REGISTER_WIDTH),
            ctrl: ControlSignals::default(),
        }
    }
}

/// Memory → Writeback boundary.
#[derive(Clone, Debug)]
pub struct MemWbEntry {
    /// Data read from memory (for loads).
    pub read_data: BitVector,
    /// ALU result (for non-loads).
    pub alu_result: BitVector,
    /// Destination register.
    pub write_reg: BitVector,
    /// Control word pass-through.
    pub ctrl: ControlSignals,
}

impl Default for MemWbEntry {
    fn default() -> Self {
        Self {
            read_data: BitVector::zeros(WORD_WIDTH),
            alu_result: BitVector::zeros(WORD_WIDTH),
            write_reg: BitVector::zeros(REGISTER_WIDTH),
            ctrl: ControlSignals::default(),
        }
    }
}

/// Writeback staging record: the register-file write the next Decode call
/// applies.
#[derive(Clone, Debug)]
pub struct WbEntry {
    /// Register-file write enable.
    pub reg_write: Bit,
    /// Value to write (ALU result or loaded data per `mem_to_reg`).
    pub write_data: BitVector,
    /// Destination register.
    pub write_reg: BitVector,
}

impl Default for WbEntry {
    fn default() -> Self {
        Self {
            reg_write: Bit::Zero,
            write_data: BitVector::zeros(WORD_WIDTH),
            write_reg: BitVector::zeros(REGISTER_WIDTH),
        }
    }
}

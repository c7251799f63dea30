//! The single-cycle accumulator machine.
//!
//! A minimal datapath predating the pipelined core: a 4-bit accumulator
//! register, a 16-row program RAM, and the combinational
//! invert/negate + AND/ADD ALU from [`crate::logic::arith`], all joined by
//! a data bus. Control is external — the caller drives the individual
//! control wires through a structured input record and supplies the clock.

use crate::common::bit::Bit;
use crate::common::error::LogicError;
use crate::common::vector::BitVector;
use crate::logic::arith;
use crate::logic::select::mux2;
use crate::state::ram::SingleReadRam;
use crate::state::register::Register;

/// Accumulator datapath width.
pub const ACCUMULATOR_WIDTH: usize = 4;

/// Program RAM rows.
pub const PROGRAM_ROWS: usize = 16;

/// One instruction's worth of control and data wires.
///
/// Constructed by field name; `Default` leaves every wire low.
#[derive(Clone, Debug)]
pub struct AccumulatorInputs {
    /// External data input.
    pub data_in: BitVector,
    /// Program RAM address.
    pub address: BitVector,
    /// ALU invert control.
    pub invert: Bit,
    /// ALU arithmetic (add/negate) control.
    pub arithmetic: Bit,
    /// ALU pass-through control.
    pub pass: Bit,
    /// Accumulator load enable.
    pub load_accumulator: Bit,
    /// Puts the accumulator (instead of the data mux) on the bus.
    pub accumulator_to_bus: Bit,
    /// Asynchronous accumulator reset.
    pub reset: Bit,
    /// Puts the program RAM output (instead of `data_in`) on the bus.
    pub read: Bit,
    /// Program RAM write enable.
    pub write: Bit,
}

impl Default for AccumulatorInputs {
    fn default() -> Self {
        Self {
            data_in: BitVector::zeros(ACCUMULATOR_WIDTH),
            address: BitVector::zeros(ACCUMULATOR_WIDTH),
            invert: Bit::Zero,
            arithmetic: Bit::Zero,
            pass: Bit::Zero,
            load_accumulator: Bit::Zero,
            accumulator_to_bus: Bit::Zero,
            reset: Bit::Zero,
            read: Bit::Zero,
            write: Bit::Zero,
        }
    }
}

/// The accumulator CPU.
#[derive(Debug)]
pub struct AccumulatorCpu {
    accumulator: Register,
    program_ram: SingleReadRam,
    /// Current ALU output.
    pub alu_out: BitVector,
    /// Current accumulator contents.
    pub accum: BitVector,
    /// Current data bus value.
    pub data_bus: BitVector,
}

impl Default for AccumulatorCpu {
    fn default() -> Self {
        Self::new()
    }
}

impl AccumulatorCpu {
    /// Creates the machine with zeroed accumulator, RAM, and bus.
    pub fn new() -> Self {
        Self {
            accumulator: Register::new(ACCUMULATOR_WIDTH),
            program_ram: SingleReadRam::new(ACCUMULATOR_WIDTH, PROGRAM_ROWS),
            alu_out: BitVector::zeros(ACCUMULATOR_WIDTH),
            accum: BitVector::zeros(ACCUMULATOR_WIDTH),
            data_bus: BitVector::zeros(ACCUMULATOR_WIDTH),
        }
    }

    /// Bulk-loads the program RAM starting at row zero.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::SelectorOutOfRange`] when more rows are
    /// supplied than the RAM holds.
    pub fn load_program(&mut self, rows: &[BitVector]) -> Result<(), LogicError> {
        self.program_ram.load(rows)
    }

    /// Program RAM row contents, if the address is in range.
    pub fn program_word(&self, address: usize) -> Option<&BitVector> {
        self.program_ram.row(address)
    }

    /// Advances the machine by one clock level.
    ///
    /// Update order within the call: program RAM read, bus muxes, ALU,
    /// accumulator, bus refresh (the accumulator may have changed), program
    /// RAM write — so a stored value reflects what the bus carried after
    /// this tick's accumulator update.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::SelectorOutOfRange`] for an address beyond the
    /// program RAM.
    pub fn write(&mut self, inputs: &AccumulatorInputs, clock: Bit) -> Result<(), LogicError> {
        let _ = self.program_ram.read(&inputs.address)?;
        self.update_data_bus(inputs);
        self.update_alu(inputs);
        self.update_accumulator(inputs, clock);
        self.update_data_bus(inputs);
        let bus = self.data_bus.clone();
        self.program_ram
            .write(&inputs.address, &bus, inputs.write, clock)
    }

    /// Executes one full instruction: `0 → 1 → 0` for one clean rising edge.
    ///
    /// # Errors
    ///
    /// Propagates the first failing clock level.
    pub fn execute_instruction(&mut self, inputs: &AccumulatorInputs) -> Result<(), LogicError> {
        self.write(inputs, Bit::Zero)?;
        self.write(inputs, Bit::One)?;
        self.write(inputs, Bit::Zero)
    }

    fn update_data_bus(&mut self, inputs: &AccumulatorInputs) {
        let data = mux2(&inputs.data_in, self.program_ram.output(), inputs.read);
        self.data_bus = mux2(&data, &self.accum, inputs.accumulator_to_bus);
    }

    fn update_alu(&mut self, inputs: &AccumulatorInputs) {
        let alu = arith::alu(
            &self.data_bus,
            &self.accum,
            Bit::Zero,
            inputs.invert,
            inputs.arithmetic,
            inputs.pass,
        );
        self.alu_out = alu.y;
    }

    fn update_accumulator(&mut self, inputs: &AccumulatorInputs, clock: Bit) {
        let alu_out = self.alu_out.clone();
        self.accumulator
            .write(&alu_out, inputs.load_accumulator, inputs.reset, clock);
        self.accum = self.accumulator.q().clone();
    }
}

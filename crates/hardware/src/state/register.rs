//! N-bit register built from async D flip-flops.

use crate::common::bit::Bit;
use crate::common::vector::BitVector;
use crate::logic::select::mux2;
use crate::state::flipflop::DFlipFlopAsync;

/// Register with a load enable and an asynchronous reset.
///
/// A two-way mux recirculates the current value when `enable` is low, so the
/// flip-flops clock every tick but only capture new data when enabled.
#[derive(Clone, Debug)]
pub struct Register {
    flops: Vec<DFlipFlopAsync>,
    q: BitVector,
}

impl Register {
    /// Creates a register of the given width holding all zeros.
    pub fn new(width: usize) -> Self {
        Self {
            flops: vec![DFlipFlopAsync::new(); width],
            q: BitVector::zeros(width),
        }
    }

    /// Stored width.
    pub fn width(&self) -> usize {
        self.q.width()
    }

    /// Current output.
    pub const fn q(&self) -> &BitVector {
        &self.q
    }

    /// Clocks the register: on a rising edge with `enable` high, captures
    /// `d` (resized to the register width); `reset` clears asynchronously.
    pub fn write(&mut self, d: &BitVector, enable: Bit, reset: Bit, clock: Bit) {
        let next = mux2(&self.q, &d.resized(self.width()), enable);
        let mut bits = Vec::with_capacity(self.flops.len());
        for (index, flop) in self.flops.iter_mut().enumerate() {
            flop.write(next.bit(index), Bit::Zero, reset, clock);
            bits.push(flop.q());
        }
        self.q = BitVector::from_bits(bits);
    }
}

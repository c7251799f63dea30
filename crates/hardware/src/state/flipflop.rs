//! Flip-flops.
//!
//! Two-state machines transitioning on rising clock edges, each maintaining
//! `q` and its complement `not_q` for consumers that need both rails. The
//! async-capable D variant additionally honors set/clear lines that bypass
//! the clock entirely.

use crate::common::bit::Bit;
use crate::common::error::LogicError;
use crate::common::vector::BitVector;
use crate::logic::gates;
use crate::state::clock::EdgeDetector;

/// Width-N D flip-flop: on a rising edge, `q` takes the data input.
#[derive(Clone, Debug)]
pub struct DFlipFlop {
    q: BitVector,
    not_q: BitVector,
    edge: EdgeDetector,
}

impl DFlipFlop {
    /// Creates a flip-flop of the given width holding all zeros.
    pub fn new(width: usize) -> Self {
        let q = BitVector::zeros(width);
        let not_q = gates::not(&q);
        Self {
            q,
            not_q,
            edge: EdgeDetector::new(),
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

    /// Complement of the current output.
    pub const fn not_q(&self) -> &BitVector {
        &self.not_q
    }

    /// Clocks the flip-flop: on a rising edge, `q` takes `d` (resized to the
    /// stored width).
    pub fn write(&mut self, d: &BitVector, clock: Bit) {
        if self.edge.sense(clock) {
            self.q = d.resized(self.q.width());
            self.not_q = gates::not(&self.q);
        }
    }
}

/// Single-bit D flip-flop with asynchronous set and clear.
///
/// The async lines take effect immediately, regardless of the clock, and
/// skip the synchronous D path for that call; clear overrides set when both
/// are asserted. The clock level is still recorded on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct DFlipFlopAsync {
    q: Bit,
    not_q: Bit,
    edge: EdgeDetector,
}

impl DFlipFlopAsync {
    /// Creates a flip-flop holding zero.
    pub fn new() -> Self {
        Self {
            q: Bit::Zero,
            not_q: Bit::One,
            edge: EdgeDetector::new(),
        }
    }

    /// Current output.
    pub const fn q(&self) -> Bit {
        self.q
    }

    /// Complement of the current output.
    pub const fn not_q(&self) -> Bit {
        self.not_q
    }

    /// Clocks the flip-flop, with `set`/`clear` taking async priority.
    pub fn write(&mut self, d: Bit, set: Bit, clear: Bit, clock: Bit) {
        let rising = self.edge.sense(clock);
        if clear.is_set() {
            self.q = Bit::Zero;
        } else if set.is_set() {
            self.q = Bit::One;
        } else if rising {
            self.q = d;
        }
        self.not_q = self.q.not();
    }
}

/// S-R flip-flop: on a rising edge, `q ← S OR (q AND NOT R)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SrFlipFlop {
    q: Bit,
    not_q: Bit,
    edge: EdgeDetector,
}

impl SrFlipFlop {
    /// Creates a flip-flop holding zero.
    pub fn new() -> Self {
        Self {
            q: Bit::Zero,
            not_q: Bit::One,
            edge: EdgeDetector::new(),
        }
    }

    /// Current output.
    pub const fn q(&self) -> Bit {
        self.q
    }

    /// Complement of the current output.
    pub const fn not_q(&self) -> Bit {
        self.not_q
    }

    /// Clocks the flip-flop.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::InvalidState`] when both inputs are asserted on
    /// a rising edge. The clock level has already been recorded at that
    /// point, so the rejected edge does not re-trigger.
    pub fn write(&mut self, s: Bit, r: Bit, clock: Bit) -> Result<(), LogicError> {
        if self.edge.sense(clock) {
            if s.and(r).is_set() {
                return Err(LogicError::InvalidState);
            }
            self.q = s.or(self.q.and(r.not()));
            self.not_q = self.q.not();
        }
        Ok(())
    }
}

/// J-K flip-flop: on a rising edge, `q ← (NOT q AND J) OR (q AND NOT K)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JkFlipFlop {
    q: Bit,
    not_q: Bit,
    edge: EdgeDetector,
}

impl JkFlipFlop {
    /// Creates a flip-flop holding zero.
    pub fn new() -> Self {
        Self {
            q: Bit::Zero,
            not_q: Bit::One,
            edge: EdgeDetector::new(),
        }
    }

    /// Current output.
    pub const fn q(&self) -> Bit {
        self.q
    }

    /// Complement of the current output.
    pub const fn not_q(&self) -> Bit {
        self.not_q
    }

    /// Clocks the flip-flop.
    pub fn write(&mut self, j: Bit, k: Bit, clock: Bit) {
        if self.edge.sense(clock) {
            self.q = self.not_q.and(j).or(self.q.and(k.not()));
            self.not_q = self.q.not();
        }
    }
}

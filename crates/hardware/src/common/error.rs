//! Error types for the simulation engine.
//!
//! Every failure in the engine is a local, synchronous error raised at the
//! call that detected it. There is no transient-failure category: nothing is
//! retried, and there is no recovery path inside the engine — callers catch
//! and report.

use thiserror::Error;

/// Errors raised by combinational evaluation, sequential elements, and the
/// datapath control unit.
///
/// Width disagreements between operands never appear here: position-wise
/// operations uniformly zero-extend the shorter operand to the longer
/// operand's width. [`LogicError::WidthMismatch`] is reserved for shape
/// disagreements that padding cannot repair, such as splitting an
/// instruction word of the wrong width.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicError {
    /// A character other than `'0'` or `'1'` appeared in a bit position.
    #[error("invalid bit symbol {0:?}")]
    InvalidBitSymbol(char),

    /// A vector's declared shape disagrees with its actual width.
    #[error("width mismatch: expected {expected} bits, got {actual}")]
    WidthMismatch {
        /// Width the operation requires.
        expected: usize,
        /// Width that was actually supplied.
        actual: usize,
    },

    /// An S-R flip-flop saw both inputs asserted on a rising edge.
    #[error("S and R flip-flop inputs cannot both be high")]
    InvalidState,

    /// A mux selector or storage address decoded beyond the input count.
    #[error("selector {selector} out of range for {inputs} inputs")]
    SelectorOutOfRange {
        /// Decoded unsigned value of the selector or address.
        selector: usize,
        /// Number of inputs or rows actually available.
        inputs: usize,
    },

    /// The control unit saw an encoding with no defined behavior.
    ///
    /// Unknown opcodes fail loudly instead of decaying to an all-zero
    /// control word.
    #[error("unsupported opcode {0}")]
    UnsupportedOpcode(String),

    /// Name-based gate dispatch was asked for a gate that does not exist.
    #[error("unknown gate {0:?}")]
    UnknownGate(String),

    /// A variadic gate evaluation was given no operands.
    #[error("gate evaluation requires at least one operand")]
    EmptyInput,
}

//! Instruction encoding.
//!
//! 32-bit instruction words with the classic two layouts:
//! - R-type: `opcode(6) rs(5) rt(5) rd(5) shamt(5) funct(6)`
//! - I-type: `opcode(6) rs(5) rt(5) immediate(16)`
//!
//! Fields are extracted as bit vectors so the datapath can route them as
//! wires; numeric opcode/funct constants live in [`opcodes`] and [`funct`]
//! for the control unit's lookups.

use crate::common::constants::{
    FUNCT_WIDTH, IMMEDIATE_WIDTH, OPCODE_WIDTH, REGISTER_WIDTH, SHAMT_WIDTH, WORD_WIDTH,
};
use crate::common::error::LogicError;
use crate::common::vector::BitVector;

/// Opcode encodings understood by the control unit.
pub mod opcodes {
    /// R-format arithmetic/logic instructions.
    pub const RTYPE: u64 = 0b00_0000;
    /// Branch on equal.
    pub const BEQ: u64 = 0b00_0100;
    /// Load word.
    pub const LW: u64 = 0b10_0011;
    /// Store word.
    pub const SW: u64 = 0b10_1011;
}

/// R-type function-field encodings.
pub mod funct {
    /// Signed addition.
    pub const ADD: u64 = 0b10_0000;
    /// Signed subtraction.
    pub const SUB: u64 = 0b10_0010;
    /// Bitwise AND.
    pub const AND: u64 = 0b10_0100;
    /// Bitwise OR.
    pub const OR: u64 = 0b10_0101;
    /// Set on less than (signed).
    pub const SLT: u64 = 0b10_1010;
}

/// The named fields of an R-type instruction word.
#[derive(Clone, Debug)]
pub struct InstructionFields {
    /// Opcode field (6 bits).
    pub opcode: BitVector,
    /// First source register (5 bits).
    pub rs: BitVector,
    /// Second source register (5 bits).
    pub rt: BitVector,
    /// Destination register (5 bits).
    pub rd: BitVector,
    /// Shift amount (5 bits).
    pub shamt: BitVector,
    /// Function field (6 bits).
    pub funct: BitVector,
}

/// Splits a 32-bit instruction word into its R-type fields.
///
/// # Errors
///
/// Returns [`LogicError::WidthMismatch`] when the word is not 32 bits wide.
pub fn split(instruction: &BitVector) -> Result<InstructionFields, LogicError> {
    if instruction.width() != WORD_WIDTH {
        return Err(LogicError::WidthMismatch {
            expected: WORD_WIDTH,
            actual: instruction.width(),
        });
    }
    let mut start = 0;
    let mut take = |width: usize| {
        let field = instruction.field(start, width);
        start += width;
        field
    };
    Ok(InstructionFields {
        opcode: take(OPCODE_WIDTH),
        rs: take(REGISTER_WIDTH),
        rt: take(REGISTER_WIDTH),
        rd: take(REGISTER_WIDTH),
        shamt: take(SHAMT_WIDTH),
        funct: take(FUNCT_WIDTH),
    })
}

/// Extracts the I-type immediate: the low 16 bits of the word.
///
/// # Errors
///
/// Returns [`LogicError::WidthMismatch`] when the word is not 32 bits wide.
pub fn immediate(instruction: &BitVector) -> Result<BitVector, LogicError> {
    if instruction.width() != WORD_WIDTH {
        return Err(LogicError::WidthMismatch {
            expected: WORD_WIDTH,
            actual: instruction.width(),
        });
    }
    Ok(instruction.field(WORD_WIDTH - IMMEDIATE_WIDTH, IMMEDIATE_WIDTH))
}

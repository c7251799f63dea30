//! Pipeline control signals and control-unit lookups.
//!
//! The control unit decodes the opcode into one fixed tuple of control
//! wires, and the ALU control refines the 2-bit `alu_op` with the funct
//! field into a concrete ALU operation. Both lookups are closed: an
//! encoding outside the table fails with
//! [`LogicError::UnsupportedOpcode`] instead of decaying to an all-zero
//! control word.

use crate::common::bit::Bit;
use crate::common::constants::ALU_OP_WIDTH;
use crate::common::error::LogicError;
use crate::common::vector::BitVector;
use crate::isa::{funct, opcodes};

/// Control wires produced by the main control unit, carried down the
/// pipeline alongside the data they govern.
#[derive(Clone, Debug)]
pub struct ControlSignals {
    /// Selects `rd` (high) over `rt` (low) as the destination register.
    pub reg_dst: Bit,
    /// Marks a branch instruction; combined with the ALU zero flag to
    /// redirect the PC.
    pub branch: Bit,
    /// Enables the data-memory read path.
    pub mem_read: Bit,
    /// Selects memory data (high) over the ALU result (low) for writeback.
    pub mem_to_reg: Bit,
    /// 2-bit ALU operation class, refined by the funct field.
    pub alu_op: BitVector,
    /// Enables the data-memory write port.
    pub mem_write: Bit,
    /// Selects the immediate (high) over the second register (low) as the
    /// ALU's B operand.
    pub alu_src: Bit,
    /// Enables the register-file write port.
    pub reg_write: Bit,
}

impl Default for ControlSignals {
    /// All wires low: a control word that asserts nothing, which keeps a
    /// cold pipeline inert.
    fn default() -> Self {
        Self {
            reg_dst: Bit::Zero,
            branch: Bit::Zero,
            mem_read: Bit::Zero,
            mem_to_reg: Bit::Zero,
            alu_op: BitVector::zeros(ALU_OP_WIDTH),
            mem_write: Bit::Zero,
            alu_src: Bit::Zero,
            reg_write: Bit::Zero,
        }
    }
}

/// Decodes an opcode into its control tuple.
///
/// # Errors
///
/// Returns [`LogicError::UnsupportedOpcode`] for any opcode outside the
/// supported set.
pub fn main_control(opcode: &BitVector) -> Result<ControlSignals, LogicError> {
    match opcode.to_unsigned() {
        opcodes::RTYPE => Ok(ControlSignals {
            reg_dst: Bit::One,
            alu_op: BitVector::from_unsigned(0b10, ALU_OP_WIDTH),
            reg_write: Bit::One,
            ..ControlSignals::default()
        }),
        opcodes::BEQ => Ok(ControlSignals {
            branch: Bit::One,
            alu_op: BitVector::from_unsigned(0b01, ALU_OP_WIDTH),
            ..ControlSignals::default()
        }),
        opcodes::LW => Ok(ControlSignals {
            mem_read: Bit::One,
            mem_to_reg: Bit::One,
            alu_src: Bit::One,
            reg_write: Bit::One,
            ..ControlSignals::default()
        }),
        opcodes::SW => Ok(ControlSignals {
            reg_dst: Bit::One,
            mem_write: Bit::One,
            alu_src: Bit::One,
            ..ControlSignals::default()
        }),
        _ => Err(LogicError::UnsupportedOpcode(opcode.to_string())),
    }
}

/// Concrete operation performed by the Execute-stage ALU.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Signed addition.
    #[default]
    Add,
    /// Signed subtraction.
    Sub,
    /// Set on less than (signed).
    Slt,
}

/// Refines the control unit's `alu_op` class with the funct field.
///
/// Class `00` is always Add (address arithmetic), `01` always Sub (branch
/// comparison), and `10` decodes the funct field's low nibble. The all-zero
/// funct therefore decodes to Add, which keeps the all-zero instruction word
/// inert as an R-type no-op.
///
/// # Errors
///
/// Returns [`LogicError::UnsupportedOpcode`] for an unrecognized funct or
/// an undefined `alu_op` class.
pub fn alu_control(alu_op: &BitVector, funct_field: &BitVector) -> Result<AluOp, LogicError> {
    match alu_op.to_unsigned() {
        0b00 => Ok(AluOp::Add),
        0b01 => Ok(AluOp::Sub),
        0b10 => match funct_field.to_unsigned() & 0b1111 {
            f if f == (funct::ADD & 0b1111) => Ok(AluOp::Add),
            f if f == (funct::SUB & 0b1111) => Ok(AluOp::Sub),
            f if f == (funct::AND & 0b1111) => Ok(AluOp::And),
            f if f == (funct::OR & 0b1111) => Ok(AluOp::Or),
            f if f == (funct::SLT & 0b1111) => Ok(AluOp::Slt),
            _ => Err(LogicError::UnsupportedOpcode(funct_field.to_string())),
        },
        _ => Err(LogicError::UnsupportedOpcode(alu_op.to_string())),
    }
}

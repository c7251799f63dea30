//! Execute-stage Arithmetic Logic Unit.
//!
//! Dispatches the control unit's [`AluOp`] onto the combinational circuits
//! in [`crate::logic::arith`] and reports the zero flag the branch logic
//! consumes.

use crate::common::bit::Bit;
use crate::common::vector::BitVector;
use crate::core::pipeline::signals::AluOp;
use crate::logic::{arith, gates};

/// ALU result and flags.
#[derive(Clone, Debug)]
pub struct AluOutput {
    /// Operation result at the standardized operand width.
    pub result: BitVector,
    /// Set when the result is all zero.
    pub zero: Bit,
}

/// The Execute-stage ALU.
#[derive(Clone, Copy, Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation over two operands.
    ///
    /// Operands are standardized to the wider width; `Slt` produces a
    /// vector whose least significant bit is the signed comparison result.
    pub fn execute(op: AluOp, a: &BitVector, b: &BitVector) -> AluOutput {
        let (a, b) = BitVector::standardized(a, b);
        let result = match op {
            AluOp::And => gates::and(&a, &b),
            AluOp::Or => gates::or(&a, &b),
            AluOp::Add => arith::add_fixed(&a, &b, Bit::Zero).sum,
            AluOp::Sub => arith::sub(&a, &b).value,
            AluOp::Slt => BitVector::from(arith::lt(&a, &b)).pad_to(a.width()),
        };
        let zero = arith::is_zero(&result);
        AluOutput { result, zero }
    }
}

//! Truth-table enumeration and name-based gate dispatch.
//!
//! This is the surface the external truth-table visualizer drives: it knows
//! gates by name and renders whatever rows [`test_gate`] forwards to its
//! sink.

use crate::common::error::LogicError;
use crate::common::vector::BitVector;
use crate::logic::gates;

/// Enumerates the full truth table of `gate` over `num_inputs` input bits.
///
/// Input patterns run in ascending order, zero-padded to `num_inputs` bits,
/// MSB first; each `(inputs, gate(inputs))` pair is forwarded to `sink`.
///
/// # Errors
///
/// Propagates the first error `gate` returns.
pub fn test_gate<G, S>(gate: G, num_inputs: usize, mut sink: S) -> Result<(), LogicError>
where
    G: Fn(&BitVector) -> Result<BitVector, LogicError>,
    S: FnMut(&BitVector, &BitVector),
{
    let rows = 1u64 << num_inputs;
    for value in 0..rows {
        let inputs = BitVector::from_unsigned(value, num_inputs);
        let output = gate(&inputs)?;
        sink(&inputs, &output);
    }
    Ok(())
}

/// Evaluates a gate by name over a list of operand vectors.
///
/// Recognized names: `and`, `or`, `nand`, `nor`, `xor`, `xnor`, and the
/// unary `not` (which takes the first operand).
///
/// # Errors
///
/// Returns [`LogicError::EmptyInput`] for an empty operand list and
/// [`LogicError::UnknownGate`] for an unrecognized name.
pub fn evaluate(name: &str, operands: &[BitVector]) -> Result<BitVector, LogicError> {
    let Some(first) = operands.first() else {
        return Err(LogicError::EmptyInput);
    };
    match name {
        "and" => Ok(gates::and_all(operands)),
        "or" => Ok(gates::or_all(operands)),
        "nand" => Ok(gates::nand_all(operands)),
        "nor" => Ok(gates::nor_all(operands)),
        "xor" => Ok(gates::xor_all(operands)),
        "xnor" => Ok(gates::xnor_all(operands)),
        "not" => Ok(gates::not(first)),
        other => Err(LogicError::UnknownGate(other.to_string())),
    }
}

//! Selection circuits: multiplexers and the demultiplexer.

use crate::common::bit::Bit;
use crate::common::error::LogicError;
use crate::common::vector::BitVector;

/// Selects one input by a binary-encoded selector.
///
/// Inputs are standardized to the widest input's width; the selector is
/// read as an unsigned index, MSB first.
///
/// # Errors
///
/// Returns [`LogicError::SelectorOutOfRange`] when the decoded selector
/// exceeds the input count.
///
/// # Examples
///
/// ```
/// use gatesim_core::logic::select::mux;
///
/// let inputs = vec!["00".parse()?, "01".parse()?, "10".parse()?, "11".parse()?];
/// let selected = mux(&inputs, &"10".parse()?)?;
/// assert_eq!(selected.to_string(), "10");
/// # Ok::<(), gatesim_core::common::LogicError>(())
/// ```
pub fn mux(inputs: &[BitVector], selector: &BitVector) -> Result<BitVector, LogicError> {
    let index = selector.to_unsigned() as usize;
    if index >= inputs.len() {
        return Err(LogicError::SelectorOutOfRange {
            selector: index,
            inputs: inputs.len(),
        });
    }
    let width = inputs.iter().map(BitVector::width).max().unwrap_or(0);
    Ok(inputs[index].pad_to(width))
}

/// Two-way multiplexer: `a` when `select` is low, `b` when high.
///
/// The ubiquitous special case of [`mux`] for single-bit control wires; the
/// output is standardized to the wider input's width.
pub fn mux2(a: &BitVector, b: &BitVector, select: Bit) -> BitVector {
    let width = a.width().max(b.width());
    if select.is_set() {
        b.pad_to(width)
    } else {
        a.pad_to(width)
    }
}

/// Demultiplexer: decodes `selector` into a one-hot vector of width
/// `2^|selector|`, gated by `enable`.
///
/// The output is all zero unless `enable` is high, in which case exactly
/// the bit at the decoded index (counted from the MSB end) is set.
pub fn demux(enable: Bit, selector: &BitVector) -> BitVector {
    let width = 1usize << selector.width();
    let mut bits = vec![Bit::Zero; width];
    if enable.is_set() {
        bits[selector.to_unsigned() as usize] = Bit::One;
    }
    BitVector::from_bits(bits)
}

//! Primitive logic gates.
//!
//! Pairwise and variadic `and`/`or`/`nand`/`nor`/`xor`/`xnor`/`not` over
//! single bits and over bit vectors. Vector forms apply the operator
//! position-wise after zero-extending the shorter operand (the engine-wide
//! width policy); variadic forms fold the pairwise operator across the
//! operand list.
//!
//! Multi-input AND and OR short-circuit logically: AND settles to zero on
//! the first zero operand bit, OR settles to one on the first one. With the
//! typed [`Bit`] representation every operand is a legal symbol by
//! construction, so no validation is repeated here.

use crate::common::bit::Bit;
use crate::common::vector::BitVector;

/// Multi-input AND over single bits; zero as soon as any input is zero.
pub fn bit_and(bits: &[Bit]) -> Bit {
    for &bit in bits {
        if bit.not().is_set() {
            return Bit::Zero;
        }
    }
    Bit::One
}

/// Multi-input OR over single bits; one as soon as any input is one.
pub fn bit_or(bits: &[Bit]) -> Bit {
    for &bit in bits {
        if bit.is_set() {
            return Bit::One;
        }
    }
    Bit::Zero
}

/// Multi-input XOR over single bits (odd parity).
pub fn bit_xor(bits: &[Bit]) -> Bit {
    bits.iter().fold(Bit::Zero, |acc, &bit| acc.xor(bit))
}

/// Multi-input NAND over single bits.
pub fn bit_nand(bits: &[Bit]) -> Bit {
    bit_and(bits).not()
}

/// Multi-input NOR over single bits.
pub fn bit_nor(bits: &[Bit]) -> Bit {
    bit_or(bits).not()
}

/// Multi-input XNOR over single bits (even parity).
pub fn bit_xnor(bits: &[Bit]) -> Bit {
    bit_xor(bits).not()
}

/// Position-wise complement.
pub fn not(x: &BitVector) -> BitVector {
    x.map(Bit::not)
}

/// Position-wise AND of two vectors.
pub fn and(a: &BitVector, b: &BitVector) -> BitVector {
    BitVector::zip_with(a, b, Bit::and)
}

/// Position-wise OR of two vectors.
pub fn or(a: &BitVector, b: &BitVector) -> BitVector {
    BitVector::zip_with(a, b, Bit::or)
}

/// Position-wise XOR of two vectors.
pub fn xor(a: &BitVector, b: &BitVector) -> BitVector {
    BitVector::zip_with(a, b, Bit::xor)
}

/// Position-wise NAND of two vectors.
pub fn nand(a: &BitVector, b: &BitVector) -> BitVector {
    not(&and(a, b))
}

/// Position-wise NOR of two vectors.
pub fn nor(a: &BitVector, b: &BitVector) -> BitVector {
    not(&or(a, b))
}

/// Position-wise XNOR of two vectors.
pub fn xnor(a: &BitVector, b: &BitVector) -> BitVector {
    not(&xor(a, b))
}

/// Variadic position-wise AND; an empty list yields the empty vector.
pub fn and_all(inputs: &[BitVector]) -> BitVector {
    fold(inputs, and)
}

/// Variadic position-wise OR; an empty list yields the empty vector.
pub fn or_all(inputs: &[BitVector]) -> BitVector {
    fold(inputs, or)
}

/// Variadic position-wise XOR; an empty list yields the empty vector.
pub fn xor_all(inputs: &[BitVector]) -> BitVector {
    fold(inputs, xor)
}

/// Variadic position-wise NAND; an empty list yields the empty vector.
pub fn nand_all(inputs: &[BitVector]) -> BitVector {
    not(&and_all(inputs))
}

/// Variadic position-wise NOR; an empty list yields the empty vector.
pub fn nor_all(inputs: &[BitVector]) -> BitVector {
    not(&or_all(inputs))
}

/// Variadic position-wise XNOR; an empty list yields the empty vector.
pub fn xnor_all(inputs: &[BitVector]) -> BitVector {
    not(&xor_all(inputs))
}

fn fold(inputs: &[BitVector], op: impl Fn(&BitVector, &BitVector) -> BitVector) -> BitVector {
    let Some((first, rest)) = inputs.split_first() else {
        return BitVector::default();
    };
    rest.iter().fold(first.clone(), |acc, next| op(&acc, next))
}

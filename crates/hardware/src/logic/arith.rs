//! Arithmetic circuits.
//!
//! Adders, negation, comparison, and shifts, all built from the primitive
//! gates. Two adder shapes exist on purpose:
//! 1. [`add`] is the width-growing ripple adder — a final carry out becomes
//!    a new leading bit, so callers that need a fixed width must truncate or
//!    treat the growth as overflow themselves.
//! 2. [`add_fixed`] keeps the operand width and reports `carry_out` and
//!    `overflow` (carry into the MSB XOR carry out of it, the standard
//!    two's-complement rule) as explicit flags.
//!
//! Subtraction, the signed comparisons, and the logical shifts are derived
//! circuits: `a - b` is `a + !b + 1`, `lt` is the sign-XOR-overflow of that
//! difference, and shifts move bits with zero fill at a preserved width.

use crate::common::bit::Bit;
use crate::common::vector::BitVector;
use crate::logic::gates;
use crate::logic::select::mux2;

/// Sum and carry of a one-bit adder stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitSum {
    /// Sum output.
    pub sum: Bit,
    /// Carry output.
    pub carry: Bit,
}

/// Half adder: `sum = a XOR b`, `carry = a AND b`.
pub fn half_adder(a: Bit, b: Bit) -> BitSum {
    BitSum {
        sum: a.xor(b),
        carry: a.and(b),
    }
}

/// Full adder: `sum = a XOR b XOR cin`, `carry = majority(a, b, cin)`.
pub fn full_adder(a: Bit, b: Bit, cin: Bit) -> BitSum {
    BitSum {
        sum: gates::bit_xor(&[a, b, cin]),
        carry: gates::bit_or(&[a.and(b), a.and(cin), b.and(cin)]),
    }
}

/// Result of a fixed-width addition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdderResult {
    /// Sum at the standardized operand width.
    pub sum: BitVector,
    /// Carry out of the most significant bit.
    pub carry_out: Bit,
    /// Two's-complement overflow: carry into the MSB XOR carry out of it.
    pub overflow: Bit,
}

/// Fixed-width ripple-carry addition with carry and overflow flags.
///
/// Operands are standardized to the wider width first; the sum keeps that
/// width.
///
/// # Examples
///
/// ```
/// use gatesim_core::common::{Bit, BitVector};
/// use gatesim_core::logic::arith::add_fixed;
///
/// let a: BitVector = "0101".parse()?; // 5
/// let b: BitVector = "0011".parse()?; // 3
/// let r = add_fixed(&a, &b, Bit::Zero);
/// assert_eq!(r.sum.to_string(), "1000"); // 8, outside signed 4-bit range
/// assert_eq!(r.carry_out, Bit::Zero);
/// assert_eq!(r.overflow, Bit::One);
/// # Ok::<(), gatesim_core::common::LogicError>(())
/// ```
pub fn add_fixed(a: &BitVector, b: &BitVector, carry_in: Bit) -> AdderResult {
    let (a, b) = BitVector::standardized(a, b);
    let width = a.width();
    let mut bits = vec![Bit::Zero; width];
    let mut carry = carry_in;
    // For a one-bit adder the carry into the MSB is the carry in itself.
    let mut carry_into_msb = carry_in;
    for index in (0..width).rev() {
        if index == 0 {
            carry_into_msb = carry;
        }
        let stage = full_adder(a.bit(index), b.bit(index), carry);
        bits[index] = stage.sum;
        carry = stage.carry;
    }
    AdderResult {
        sum: BitVector::from_bits(bits),
        carry_out: carry,
        overflow: carry_into_msb.xor(carry),
    }
}

/// Width-growing ripple addition: a final carry out becomes a new leading
/// bit.
pub fn add(a: &BitVector, b: &BitVector) -> BitVector {
    let result = add_fixed(a, b, Bit::Zero);
    if result.carry_out.is_set() {
        result.sum.with_msb(Bit::One)
    } else {
        result.sum
    }
}

/// Variadic width-growing addition; an empty list yields the empty vector.
pub fn add_all(inputs: &[BitVector]) -> BitVector {
    let Some((first, rest)) = inputs.split_first() else {
        return BitVector::default();
    };
    rest.iter().fold(first.clone(), |acc, next| add(&acc, next))
}

/// Incrementer: a half-adder chain adding `carry_in` to `a` at preserved
/// width, returning the final carry separately.
pub fn increment(a: &BitVector, carry_in: Bit) -> (BitVector, Bit) {
    let width = a.width();
    let mut bits = vec![Bit::Zero; width];
    let mut carry = carry_in;
    for index in (0..width).rev() {
        let stage = half_adder(a.bit(index), carry);
        bits[index] = stage.sum;
        carry = stage.carry;
    }
    (BitVector::from_bits(bits), carry)
}

/// Two's-complement negation at preserved width: `!a + 1`, final carry
/// discarded, so double negation round-trips.
pub fn two_complement(a: &BitVector) -> BitVector {
    let (negated, _carry) = increment(&gates::not(a), Bit::One);
    negated
}

/// Result of a fixed-width subtraction, with the flags the signed
/// comparisons are derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Difference {
    /// `a - b` at the standardized operand width.
    pub value: BitVector,
    /// Sign bit of the difference.
    pub sign: Bit,
    /// Set when the difference is zero.
    pub zero: Bit,
    /// Two's-complement overflow of the subtraction.
    pub overflow: Bit,
}

/// Subtraction as `a + !b + 1` with sign, zero, and overflow flags.
pub fn sub(a: &BitVector, b: &BitVector) -> Difference {
    let (a, b) = BitVector::standardized(a, b);
    let result = add_fixed(&a, &gates::not(&b), Bit::One);
    Difference {
        sign: result.sum.msb(),
        zero: is_zero(&result.sum),
        overflow: result.overflow,
        value: result.sum,
    }
}

/// Equality after standardizing widths: one when every position matches.
pub fn eq(a: &BitVector, b: &BitVector) -> Bit {
    let (a, b) = BitVector::standardized(a, b);
    Bit::from(a == b)
}

/// One when the vector is all zero (equality against a padded zero).
pub fn is_zero(a: &BitVector) -> Bit {
    eq(a, &BitVector::zeros(1))
}

/// Signed less-than, from the subtraction's sign and overflow flags.
pub fn lt(a: &BitVector, b: &BitVector) -> Bit {
    let d = sub(a, b);
    d.sign.xor(d.overflow)
}

/// Signed less-than-or-equal.
pub fn leq(a: &BitVector, b: &BitVector) -> Bit {
    let d = sub(a, b);
    d.sign.xor(d.overflow).or(d.zero)
}

/// Signed greater-than.
pub fn gt(a: &BitVector, b: &BitVector) -> Bit {
    leq(a, b).not()
}

/// Signed greater-than-or-equal.
pub fn geq(a: &BitVector, b: &BitVector) -> Bit {
    lt(a, b).not()
}

/// Logical left shift with zero fill at preserved width.
pub fn shift_left(a: &BitVector, amount: usize) -> BitVector {
    let width = a.width();
    if amount >= width {
        return BitVector::zeros(width);
    }
    let mut bits: Vec<Bit> = a.bits()[amount..].to_vec();
    bits.extend(std::iter::repeat_n(Bit::Zero, amount));
    BitVector::from_bits(bits)
}

/// Logical right shift with zero fill at preserved width.
pub fn shift_right(a: &BitVector, amount: usize) -> BitVector {
    let width = a.width();
    if amount >= width {
        return BitVector::zeros(width);
    }
    let mut bits = vec![Bit::Zero; amount];
    bits.extend_from_slice(&a.bits()[..width - amount]);
    BitVector::from_bits(bits)
}

/// Conditional invert/negate front end of the accumulator ALU.
///
/// XORs every bit of `a` with `invert`, then increments by
/// `invert AND negate`, which turns an inversion into a two's-complement
/// negation when both controls are high. Returns the incremented pattern and
/// the incrementer's carry.
pub fn invert_negate(a: &BitVector, invert: Bit, negate: Bit) -> (BitVector, Bit) {
    let pattern = gates::xor(a, &BitVector::repeat(invert, a.width()));
    increment(&pattern, invert.and(negate))
}

/// Output of the combinational accumulator ALU.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombAluResult {
    /// Selected output.
    pub y: BitVector,
    /// Carry out of the internal adder.
    pub carry_out: Bit,
    /// Overflow flag of the internal adder.
    pub overflow: Bit,
}

/// AND/ADD/pass selection stage of the accumulator ALU.
///
/// `y` is `a AND b` when `add_select` is low, the adder's sum when high, and
/// `a` unchanged when `pass` overrides both. Carry and overflow always come
/// from the adder.
pub fn and_add(
    a: &BitVector,
    b: &BitVector,
    carry_in: Bit,
    add_select: Bit,
    pass: Bit,
) -> CombAluResult {
    let (a, b) = BitVector::standardized(a, b);
    let adder = add_fixed(&a, &b, carry_in);
    let inner = mux2(&gates::and(&a, &b), &adder.sum, add_select);
    CombAluResult {
        y: mux2(&inner, &a, pass),
        carry_out: adder.carry_out,
        overflow: adder.overflow,
    }
}

/// The accumulator machine's combinational ALU: invert/negate front end
/// feeding the AND/ADD/pass stage.
pub fn alu(
    a: &BitVector,
    b: &BitVector,
    carry_in: Bit,
    invert: Bit,
    arithmetic: Bit,
    pass: Bit,
) -> CombAluResult {
    let (pattern, _carry) = invert_negate(a, invert, arithmetic);
    and_add(&pattern, b, carry_in, arithmetic, pass)
}

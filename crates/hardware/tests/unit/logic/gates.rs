//! Truth-table tests for the primitive gates.
//!
//! The variadic single-bit gates are checked exhaustively against boolean
//! semantics for every input count up to four; the vector forms are checked
//! position-wise, including the uniform zero-extension of mismatched
//! widths.

use gatesim_core::common::{Bit, BitVector, LogicError};
use gatesim_core::logic::gates;

use crate::common::bv;

fn patterns(n: usize) -> impl Iterator<Item = (u64, Vec<Bit>)> {
    (0..(1u64 << n)).map(move |value| (value, BitVector::from_unsigned(value, n).bits().to_vec()))
}

#[test]
fn variadic_and_matches_boolean_semantics() {
    for n in 1..=4 {
        for (value, bits) in patterns(n) {
            let expected = Bit::from(value == (1 << n) - 1);
            assert_eq!(gates::bit_and(&bits), expected, "and over {value:0width$b}", width = n);
        }
    }
}

#[test]
fn variadic_or_matches_boolean_semantics() {
    for n in 1..=4 {
        for (value, bits) in patterns(n) {
            assert_eq!(gates::bit_or(&bits), Bit::from(value != 0));
        }
    }
}

#[test]
fn variadic_xor_is_odd_parity() {
    for n in 1..=4 {
        for (value, bits) in patterns(n) {
            assert_eq!(gates::bit_xor(&bits), Bit::from(value.count_ones() % 2 == 1));
        }
    }
}

#[test]
fn variadic_complement_gates() {
    for n in 1..=4 {
        for (_, bits) in patterns(n) {
            assert_eq!(gates::bit_nand(&bits), gates::bit_and(&bits).not());
            assert_eq!(gates::bit_nor(&bits), gates::bit_or(&bits).not());
            assert_eq!(gates::bit_xnor(&bits), gates::bit_xor(&bits).not());
        }
    }
}

#[test]
fn vector_gates_apply_position_wise() {
    let a = bv("1100");
    let b = bv("1010");
    assert_eq!(gates::and(&a, &b), bv("1000"));
    assert_eq!(gates::or(&a, &b), bv("1110"));
    assert_eq!(gates::xor(&a, &b), bv("0110"));
    assert_eq!(gates::nand(&a, &b), bv("0111"));
    assert_eq!(gates::nor(&a, &b), bv("0001"));
    assert_eq!(gates::xnor(&a, &b), bv("1001"));
    assert_eq!(gates::not(&a), bv("0011"));
}

#[test]
fn mismatched_widths_zero_extend_to_the_longer_operand() {
    assert_eq!(gates::and(&bv("1111"), &bv("11")), bv("0011"));
    assert_eq!(gates::or(&bv("10"), &bv("0001")), bv("0011"));
    assert_eq!(gates::xor(&bv("1"), &bv("1000")), bv("1001"));
}

#[test]
fn variadic_vector_gates_fold_across_operands() {
    let inputs = [bv("1110"), bv("1101"), bv("1011")];
    assert_eq!(gates::and_all(&inputs), bv("1000"));
    assert_eq!(gates::or_all(&inputs), bv("1111"));
    assert_eq!(gates::xor_all(&inputs), bv("1000"));
    assert_eq!(gates::nand_all(&inputs), bv("0111"));
}

#[test]
fn empty_variadic_input_yields_empty_vector() {
    assert!(gates::and_all(&[]).is_empty());
    assert!(gates::or_all(&[]).is_empty());
}

#[test]
fn invalid_symbols_are_rejected_at_the_string_boundary() {
    let err = "10x1".parse::<BitVector>().unwrap_err();
    assert_eq!(err, LogicError::InvalidBitSymbol('x'));
    let err = "2".parse::<BitVector>().unwrap_err();
    assert_eq!(err, LogicError::InvalidBitSymbol('2'));
}

//! Execute-stage ALU tests.

use gatesim_core::common::{Bit, BitVector};
use gatesim_core::core::pipeline::signals::AluOp;
use gatesim_core::core::units::alu::Alu;

use crate::common::bv;

#[test]
fn add_and_sub() {
    let out = Alu::execute(AluOp::Add, &bv("0101"), &bv("0011"));
    assert_eq!(out.result, bv("1000"));
    assert_eq!(out.zero, Bit::Zero);

    let out = Alu::execute(AluOp::Sub, &bv("0101"), &bv("0101"));
    assert_eq!(out.result, bv("0000"));
    assert_eq!(out.zero, Bit::One);
}

#[test]
fn bitwise_operations() {
    assert_eq!(Alu::execute(AluOp::And, &bv("1100"), &bv("1010")).result, bv("1000"));
    assert_eq!(Alu::execute(AluOp::Or, &bv("1100"), &bv("1010")).result, bv("1110"));
}

#[test]
fn set_on_less_than_is_signed() {
    // -2 < 1
    let out = Alu::execute(AluOp::Slt, &bv("1110"), &bv("0001"));
    assert_eq!(out.result, bv("0001"));
    assert_eq!(out.zero, Bit::Zero);

    // 3 < 1 is false
    let out = Alu::execute(AluOp::Slt, &bv("0011"), &bv("0001"));
    assert_eq!(out.result, bv("0000"));
    assert_eq!(out.zero, Bit::One);
}

#[test]
fn operands_standardize_to_the_wider_width() {
    let out = Alu::execute(AluOp::Add, &bv("11"), &BitVector::from_unsigned(1, 8));
    assert_eq!(out.result.width(), 8);
    assert_eq!(out.result.to_unsigned(), 4);
}

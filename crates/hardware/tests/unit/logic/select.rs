//! Selection-circuit tests.

use gatesim_core::common::{Bit, BitVector, LogicError};
use gatesim_core::logic::select::{demux, mux, mux2};

use crate::common::bv;

#[test]
fn mux_selects_by_decoded_index() {
    let inputs = [bv("0001"), bv("0010"), bv("0100"), bv("1000")];
    for selector in 0..4u64 {
        let selected = mux(&inputs, &BitVector::from_unsigned(selector, 2)).unwrap();
        assert_eq!(selected, inputs[selector as usize]);
    }
}

#[test]
fn mux_rejects_out_of_range_selectors() {
    let inputs = [bv("00"), bv("01"), bv("10")];
    let err = mux(&inputs, &bv("11")).unwrap_err();
    assert_eq!(
        err,
        LogicError::SelectorOutOfRange {
            selector: 3,
            inputs: 3
        }
    );
}

#[test]
fn mux_standardizes_input_widths() {
    let inputs = [bv("11"), bv("0110")];
    assert_eq!(mux(&inputs, &bv("0")).unwrap(), bv("0011"));
    assert_eq!(mux(&inputs, &bv("1")).unwrap(), bv("0110"));
}

#[test]
fn mux2_follows_the_select_bit() {
    let a = bv("0101");
    let b = bv("1010");
    assert_eq!(mux2(&a, &b, Bit::Zero), a);
    assert_eq!(mux2(&a, &b, Bit::One), b);
}

#[test]
fn demux_sets_exactly_one_bit_when_enabled() {
    for k in 0..8u64 {
        let output = demux(Bit::One, &BitVector::from_unsigned(k, 3));
        assert_eq!(output.width(), 8);
        for (index, bit) in output.iter().enumerate() {
            assert_eq!(bit.is_set(), index as u64 == k, "selector {k}, position {index}");
        }
    }
}

#[test]
fn demux_is_all_zero_when_disabled() {
    for k in 0..8u64 {
        let output = demux(Bit::Zero, &BitVector::from_unsigned(k, 3));
        assert_eq!(output, BitVector::zeros(8));
    }
}

#[test]
fn demux_width_is_two_to_the_selector_width() {
    assert_eq!(demux(Bit::One, &bv("0")).width(), 2);
    assert_eq!(demux(Bit::One, &bv("00")).width(), 4);
    assert_eq!(demux(Bit::One, &bv("0000")).width(), 16);
}

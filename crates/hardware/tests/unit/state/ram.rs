//! Storage tests: single-read RAM and the register-file RAM.

use gatesim_core::common::{Bit, BitVector, LogicError};
use gatesim_core::state::ram::{RegisterFileRam, SingleReadRam};

use crate::common::bv;

#[test]
fn ram_write_then_read_in_the_same_tick_sees_the_new_value() {
    let mut ram = SingleReadRam::new(4, 8);
    ram.write(&bv("011"), &bv("1001"), Bit::One, Bit::Zero).unwrap();
    assert_eq!(ram.output(), &bv("0000"), "no edge, no commit");

    ram.write(&bv("011"), &bv("1001"), Bit::One, Bit::One).unwrap();
    assert_eq!(ram.output(), &bv("1001"), "same-tick write is visible");
    assert_eq!(ram.row(3), Some(&bv("1001")));
}

#[test]
fn ram_write_requires_both_the_edge_and_the_enable() {
    let mut ram = SingleReadRam::new(4, 8);
    // Enable low on a rising edge: no commit.
    ram.write(&bv("010"), &bv("1111"), Bit::Zero, Bit::Zero).unwrap();
    ram.write(&bv("010"), &bv("1111"), Bit::Zero, Bit::One).unwrap();
    assert_eq!(ram.row(2), Some(&bv("0000")));

    // Enable high while the clock stays high: still no edge.
    ram.write(&bv("010"), &bv("1111"), Bit::One, Bit::One).unwrap();
    assert_eq!(ram.row(2), Some(&bv("0000")));
}

#[test]
fn ram_read_is_asynchronous() {
    let mut ram = SingleReadRam::new(4, 4);
    ram.load(&[bv("0001"), bv("0010"), bv("0100"), bv("1000")]).unwrap();
    assert_eq!(ram.read(&bv("10")).unwrap(), &bv("0100"));
    assert_eq!(ram.read(&bv("00")).unwrap(), &bv("0001"));
    assert_eq!(ram.output(), &bv("0001"));
}

#[test]
fn ram_rejects_out_of_range_addresses() {
    let mut ram = SingleReadRam::new(4, 4);
    let err = ram.read(&bv("100")).unwrap_err();
    assert_eq!(
        err,
        LogicError::SelectorOutOfRange {
            selector: 4,
            inputs: 4
        }
    );
    // The failed call on a rising edge still recorded the clock level.
    let err = ram.write(&bv("111"), &bv("0001"), Bit::One, Bit::One).unwrap_err();
    assert!(matches!(err, LogicError::SelectorOutOfRange { .. }));
    ram.write(&bv("001"), &bv("0001"), Bit::One, Bit::One).unwrap();
    assert_eq!(ram.row(1), Some(&bv("0000")), "held-high clock is not an edge");
}

#[test]
fn ram_load_resizes_rows_and_rejects_overflow() {
    let mut ram = SingleReadRam::new(4, 2);
    ram.load(&[bv("11"), bv("111111")]).unwrap();
    assert_eq!(ram.row(0), Some(&bv("0011")));
    assert_eq!(ram.row(1), Some(&bv("1111")));

    let err = ram.load(&[bv("0"), bv("0"), bv("0")]).unwrap_err();
    assert!(matches!(err, LogicError::SelectorOutOfRange { .. }));
}

#[test]
fn register_file_reads_two_ports_independently() {
    let mut file = RegisterFileRam::new(8, 32);
    file.load(&[bv("0"), BitVector::from_unsigned(11, 8), BitVector::from_unsigned(22, 8)])
        .unwrap();
    file.read(&bv("00001"), &bv("00010")).unwrap();
    assert_eq!(file.read_data1().to_unsigned(), 11);
    assert_eq!(file.read_data2().to_unsigned(), 22);
}

#[test]
fn register_file_write_commits_before_the_reads() {
    let mut file = RegisterFileRam::new(8, 32);
    let value = BitVector::from_unsigned(42, 8);
    file.write(&bv("00101"), &bv("00000"), &bv("00101"), &value, Bit::One, Bit::Zero)
        .unwrap();
    assert_eq!(file.read_data1().to_unsigned(), 0, "no edge, old contents");

    file.write(&bv("00101"), &bv("00000"), &bv("00101"), &value, Bit::One, Bit::One)
        .unwrap();
    assert_eq!(
        file.read_data1().to_unsigned(),
        42,
        "same-tick write visible on the read port"
    );
}

#[test]
fn register_file_row_zero_is_ordinary_and_isolated() {
    let mut file = RegisterFileRam::new(8, 32);
    file.load(&[bv("0"), BitVector::from_unsigned(7, 8)]).unwrap();
    let value = BitVector::from_unsigned(99, 8);
    file.write(&bv("00000"), &bv("00001"), &bv("00000"), &value, Bit::One, Bit::Zero)
        .unwrap();
    file.write(&bv("00000"), &bv("00001"), &bv("00000"), &value, Bit::One, Bit::One)
        .unwrap();
    assert_eq!(file.read_data1().to_unsigned(), 99, "row zero is writable");
    assert_eq!(file.read_data2().to_unsigned(), 7, "neighbors untouched");
}

#[test]
fn register_file_gates_writes_by_reg_write() {
    let mut file = RegisterFileRam::new(8, 32);
    let value = BitVector::from_unsigned(13, 8);
    file.write(&bv("00011"), &bv("00000"), &bv("00011"), &value, Bit::Zero, Bit::Zero)
        .unwrap();
    file.write(&bv("00011"), &bv("00000"), &bv("00011"), &value, Bit::Zero, Bit::One)
        .unwrap();
    assert_eq!(file.read_data1().to_unsigned(), 0);
}

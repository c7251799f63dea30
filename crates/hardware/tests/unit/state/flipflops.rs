//! Flip-flop and edge-contract tests.

use gatesim_core::common::{Bit, LogicError};
use gatesim_core::state::clock::EdgeDetector;
use gatesim_core::state::flipflop::{DFlipFlop, DFlipFlopAsync, JkFlipFlop, SrFlipFlop};
use gatesim_core::state::register::Register;

use crate::common::bv;

#[test]
fn edge_detector_fires_only_on_a_zero_to_one_transition() {
    let mut edge = EdgeDetector::new();
    assert!(!edge.sense(Bit::Zero));
    assert!(edge.sense(Bit::One));
    assert!(!edge.sense(Bit::One), "held high is not an edge");
    assert!(!edge.sense(Bit::Zero));
    assert!(edge.sense(Bit::One));
}

#[test]
fn d_flip_flop_captures_on_the_rising_edge_only() {
    let mut ff = DFlipFlop::new(1);
    ff.write(&bv("1"), Bit::Zero);
    assert_eq!(ff.q(), &bv("0"), "no edge yet");

    ff.write(&bv("1"), Bit::One);
    assert_eq!(ff.q(), &bv("1"));
    assert_eq!(ff.not_q(), &bv("0"));

    // Holding the clock high and changing D must not move Q.
    ff.write(&bv("0"), Bit::One);
    assert_eq!(ff.q(), &bv("1"));

    // Only the next full 0 -> 1 transition captures the new value.
    ff.write(&bv("0"), Bit::Zero);
    assert_eq!(ff.q(), &bv("1"));
    ff.write(&bv("0"), Bit::One);
    assert_eq!(ff.q(), &bv("0"));
}

#[test]
fn d_flip_flop_holds_vectors_at_its_width() {
    let mut ff = DFlipFlop::new(4);
    ff.write(&bv("1010"), Bit::Zero);
    ff.write(&bv("1010"), Bit::One);
    assert_eq!(ff.q(), &bv("1010"));
    assert_eq!(ff.not_q(), &bv("0101"));

    // Narrow data is zero-extended, wide data truncated from the MSB side.
    ff.write(&bv("11"), Bit::Zero);
    ff.write(&bv("11"), Bit::One);
    assert_eq!(ff.q(), &bv("0011"));
}

#[test]
fn async_set_and_clear_bypass_the_clock() {
    let mut ff = DFlipFlopAsync::new();
    ff.write(Bit::Zero, Bit::One, Bit::Zero, Bit::Zero);
    assert_eq!(ff.q(), Bit::One, "set acts without any edge");

    ff.write(Bit::Zero, Bit::Zero, Bit::One, Bit::Zero);
    assert_eq!(ff.q(), Bit::Zero, "clear acts without any edge");
}

#[test]
fn async_clear_overrides_set_and_skips_the_sync_path() {
    let mut ff = DFlipFlopAsync::new();
    ff.write(Bit::One, Bit::One, Bit::One, Bit::Zero);
    assert_eq!(ff.q(), Bit::Zero, "clear wins when both are asserted");

    // A rising edge with clear asserted must not evaluate D.
    let mut ff = DFlipFlopAsync::new();
    ff.write(Bit::One, Bit::Zero, Bit::One, Bit::One);
    assert_eq!(ff.q(), Bit::Zero);
    // The clock was still recorded: holding high is not a new edge.
    ff.write(Bit::One, Bit::Zero, Bit::Zero, Bit::One);
    assert_eq!(ff.q(), Bit::Zero);
}

#[test]
fn plain_d_behavior_when_no_async_line_is_asserted() {
    let mut ff = DFlipFlopAsync::new();
    ff.write(Bit::One, Bit::Zero, Bit::Zero, Bit::Zero);
    assert_eq!(ff.q(), Bit::Zero);
    ff.write(Bit::One, Bit::Zero, Bit::Zero, Bit::One);
    assert_eq!(ff.q(), Bit::One);
    assert_eq!(ff.not_q(), Bit::Zero);
}

#[test]
fn sr_flip_flop_sets_resets_and_holds() {
    let mut ff = SrFlipFlop::new();
    ff.write(Bit::One, Bit::Zero, Bit::One).unwrap();
    assert_eq!(ff.q(), Bit::One);

    ff.write(Bit::Zero, Bit::Zero, Bit::Zero).unwrap();
    ff.write(Bit::Zero, Bit::Zero, Bit::One).unwrap();
    assert_eq!(ff.q(), Bit::One, "S=R=0 holds");

    ff.write(Bit::Zero, Bit::One, Bit::Zero).unwrap();
    ff.write(Bit::Zero, Bit::One, Bit::One).unwrap();
    assert_eq!(ff.q(), Bit::Zero, "reset clears");
    assert_eq!(ff.not_q(), Bit::One);
}

#[test]
fn sr_flip_flop_rejects_both_inputs_high() {
    let mut ff = SrFlipFlop::new();
    let err = ff.write(Bit::One, Bit::One, Bit::One).unwrap_err();
    assert_eq!(err, LogicError::InvalidState);

    // The rejected edge was still recorded: the same high level must not
    // re-trigger a (now legal) update.
    ff.write(Bit::One, Bit::Zero, Bit::One).unwrap();
    assert_eq!(ff.q(), Bit::Zero, "no edge while the clock stays high");

    ff.write(Bit::One, Bit::Zero, Bit::Zero).unwrap();
    ff.write(Bit::One, Bit::Zero, Bit::One).unwrap();
    assert_eq!(ff.q(), Bit::One);
}

#[test]
fn jk_flip_flop_covers_all_four_modes() {
    let mut ff = JkFlipFlop::new();

    // J=1 K=0: set.
    ff.write(Bit::One, Bit::Zero, Bit::Zero);
    ff.write(Bit::One, Bit::Zero, Bit::One);
    assert_eq!(ff.q(), Bit::One);

    // J=0 K=0: hold.
    ff.write(Bit::Zero, Bit::Zero, Bit::Zero);
    ff.write(Bit::Zero, Bit::Zero, Bit::One);
    assert_eq!(ff.q(), Bit::One);

    // J=1 K=1: toggle.
    ff.write(Bit::One, Bit::One, Bit::Zero);
    ff.write(Bit::One, Bit::One, Bit::One);
    assert_eq!(ff.q(), Bit::Zero);
    ff.write(Bit::One, Bit::One, Bit::Zero);
    ff.write(Bit::One, Bit::One, Bit::One);
    assert_eq!(ff.q(), Bit::One);

    // J=0 K=1: reset.
    ff.write(Bit::Zero, Bit::One, Bit::Zero);
    ff.write(Bit::Zero, Bit::One, Bit::One);
    assert_eq!(ff.q(), Bit::Zero);
}

#[test]
fn register_gates_loads_by_enable_and_clears_by_reset() {
    let mut reg = Register::new(4);
    reg.write(&bv("1010"), Bit::Zero, Bit::Zero, Bit::Zero);
    reg.write(&bv("1010"), Bit::Zero, Bit::Zero, Bit::One);
    assert_eq!(reg.q(), &bv("0000"), "enable low recirculates");

    reg.write(&bv("1010"), Bit::One, Bit::Zero, Bit::Zero);
    reg.write(&bv("1010"), Bit::One, Bit::Zero, Bit::One);
    assert_eq!(reg.q(), &bv("1010"));

    // Reset clears asynchronously, no edge required.
    reg.write(&bv("1111"), Bit::One, Bit::One, Bit::One);
    assert_eq!(reg.q(), &bv("0000"));
}

//! Shared test infrastructure.


use gatesim_core::common::BitVector;

/// Parses a bit-vector literal, panicking on malformed test input.
pub fn bv(text: &str) -> BitVector {
    text.parse().unwrap_or_else(|e| panic!("bad bit literal {text:?}: {e}"))
}

/// Builds a word-width vector from an unsigned value.
pub fn word(value: u64) -> BitVector {
    BitVector::from_unsigned(value, 32)
}

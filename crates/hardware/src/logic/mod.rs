//! Combinational circuits.
//!
//! Pure, stateless functions from bit vectors to bit vectors — no side
//! effects, no memory. Organized into operation families:
//! - [`gates`]:   primitive AND/OR/NAND/NOR/XOR/XNOR/NOT, bit and vector forms
//! - [`arith`]:   adders, negation, comparison, shifts
//! - [`select`]:  multiplexers and the demultiplexer
//! - [`harness`]: truth-table enumeration and name-based dispatch

/// Arithmetic circuits (adders, negation, comparison, shifts).
pub mod arith;

/// Primitive logic gates.
pub mod gates;

/// Truth-table harness and gate dispatch.
pub mod harness;

/// Selection circuits (mux, demux).
pub mod select;

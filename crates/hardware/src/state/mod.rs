//! Sequential elements.
//!
//! Clocked state built on a shared contract: every element embeds an
//! [`clock::EdgeDetector`] by composition, mutates its state only on a
//! detected rising edge (async set/clear lines excepted), and records the
//! clock level on every call. Each element is exclusively owned by one
//! datapath position and mutated only through its own `write`.

/// Rising-edge detection.
pub mod clock;

/// D, D-async, S-R, and J-K flip-flops.
pub mod flipflop;

/// Addressable storage (single-read RAM, register-file RAM).
pub mod ram;

/// N-bit register with load enable and async reset.
pub mod register;

pub use clock::EdgeDetector;
pub use flipflop::{DFlipFlop, DFlipFlopAsync, JkFlipFlop, SrFlipFlop};
pub use ram::{RegisterFileRam, SingleReadRam};
pub use register::Register;

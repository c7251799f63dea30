//! Common types and constants shared by every layer of the engine.
//!
//! This module provides the fundamental building blocks:
//! 1. **Bit symbols:** the two-valued [`Bit`] type; invalid symbols are
//!    rejected at the string boundary.
//! 2. **Bit vectors:** the fixed-width, MSB-first [`BitVector`] with explicit
//!    resizing and the engine-wide zero-extension width policy.
//! 3. **Constants:** word and field widths, register counts, datapath steps.
//! 4. **Error handling:** the [`LogicError`] taxonomy.

/// The two-valued bit symbol type.
pub mod bit;

/// Common constants used throughout the engine.
pub mod constants;

/// Error types.
pub mod error;

/// Fixed-width bit vectors.
pub mod vector;

pub use bit::Bit;
pub use error::LogicError;
pub use vector::BitVector;

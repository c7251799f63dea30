//! Functional units used by the Execute stage.

/// The Execute-stage ALU.
pub mod alu;

pub use alu::{Alu, AluOutput};

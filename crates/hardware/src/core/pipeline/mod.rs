//! Pipeline structures: stage-boundary latches, control signals, and the
//! stage functions themselves.

/// Stage-boundary records and the clocked latch holding them.
pub mod latches;

/// Control signals and the control-unit lookups.
pub mod signals;

/// The five stage functions.
pub(crate) mod stages;

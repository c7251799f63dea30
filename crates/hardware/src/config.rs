//! Simulator configuration.
//!
//! Sizes the CPU's memories. Deserializes from JSON for external drivers;
//! `Config::default()` gives 64-slot instruction and data memories.

use serde::Deserialize;

use crate::common::constants::REGISTER_COUNT;

/// Default instruction-memory slot count.
const DEFAULT_INSTRUCTION_SLOTS: usize = 64;

/// Default data-memory slot count.
const DEFAULT_DATA_SLOTS: usize = 64;

/// CPU sizing configuration.
///
/// The register file is fixed at [`REGISTER_COUNT`] registers; only the
/// memories are sized here.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of 32-bit instruction-memory slots.
    pub instruction_slots: usize,
    /// Number of 32-bit data-memory slots.
    pub data_slots: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instruction_slots: DEFAULT_INSTRUCTION_SLOTS,
            data_slots: DEFAULT_DATA_SLOTS,
        }
    }
}

impl Config {
    /// Deserializes a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Number of registers in the register file (fixed).
    pub const fn register_count(&self) -> usize {
        REGISTER_COUNT
    }
}

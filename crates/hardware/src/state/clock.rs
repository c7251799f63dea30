//! The edge-triggered state contract.
//!
//! Every stateful element embeds an [`EdgeDetector`] by composition and asks
//! it, once per `write` call, whether the supplied clock level is a rising
//! edge. The detector records the level unconditionally in the same call —
//! before the caller branches on the answer — so async early returns and
//! error paths can never leave a stale previous level behind. A stale level
//! would make the detector re-trigger on a clock that never transitioned.

use crate::common::bit::Bit;

/// Rising-edge detector over a single clock line.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDetector {
    previous: Bit,
}

impl EdgeDetector {
    /// Creates a detector with the previous level at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples the clock: returns `true` exactly when the level rose from
    /// the previously recorded one (`NOT previous AND clock`), and records
    /// `clock` as the new previous level.
    pub fn sense(&mut self, clock: Bit) -> bool {
        let rising = self.previous.not().and(clock).is_set();
        self.previous = clock;
        rising
    }

    /// The last recorded clock level.
    pub const fn previous(&self) -> Bit {
        self.previous
    }
}

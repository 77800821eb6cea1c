use serde::{Deserialize, Serialize};

/// One kind of deferred recomputation consumed by the frame scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PendingTopic {
    /// Re-apply the current range (after a resize).
    RangeRefresh,
    /// Index bracket changed; the decimation plan is stale.
    Decimation,
    /// Visible extremes must be recomputed.
    Extrema,
    /// Pixel positions and series paths are stale.
    Positions,
    /// Cursor line and label need repositioning.
    Cursor,
}

impl PendingTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::RangeRefresh => 1 << 0,
            Self::Decimation => 1 << 1,
            Self::Extrema => 1 << 2,
            Self::Positions => 1 << 3,
            Self::Cursor => 1 << 4,
        }
    }
}

/// Bitmask of pending topics for one chart view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PendingWork {
    bits: u8,
}

impl PendingWork {
    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn contains(self, topic: PendingTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }

    pub fn insert(&mut self, topic: PendingTopic) {
        self.bits |= topic.bit();
    }

    /// Clears `topic` and reports whether it was set.
    pub fn take(&mut self, topic: PendingTopic) -> bool {
        let was_set = self.contains(topic);
        self.bits &= !topic.bit();
        was_set
    }
}

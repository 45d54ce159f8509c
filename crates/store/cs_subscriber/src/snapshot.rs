use std::sync::Arc;

use parking_lot::Mutex;

/// The two covariance entries of the most recently accepted message.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScalarSnapshot {
    pub value_a: f64,
    pub value_b: f64,
}

/// How many deliveries the collector has seen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollectorStats {
    /// Messages that updated the snapshot.
    pub accepted: u64,

    /// Messages that could not be decoded or were too short.
    pub rejected: u64,
}

#[derive(Default)]
struct SlotState {
    snapshot: ScalarSnapshot,
    stats: CollectorStats,
}

/// A shared, overwrite-only home for the latest [`ScalarSnapshot`].
///
/// Cloning gives another handle to the same slot. Both values of a snapshot are
/// written and read under one lock, so a reader never sees a pair mixed from two messages.
#[derive(Clone, Default)]
pub struct SnapshotSlot {
    state: Arc<Mutex<SlotState>>,
}

impl SnapshotSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest snapshot; zeros until the first message is accepted.
    pub fn snapshot(&self) -> ScalarSnapshot {
        self.state.lock().snapshot
    }

    pub fn stats(&self) -> CollectorStats {
        self.state.lock().stats
    }

    pub(crate) fn store(&self, snapshot: ScalarSnapshot) {
        let mut state = self.state.lock();
        state.snapshot = snapshot;
        state.stats.accepted += 1;
    }

    pub(crate) fn record_rejected(&self) {
        self.state.lock().stats.rejected += 1;
    }
}

impl std::fmt::Debug for SnapshotSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("SnapshotSlot")
            .field("snapshot", &state.snapshot)
            .field("stats", &state.stats)
            .finish()
    }
}

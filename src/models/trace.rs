//! Step trace model.
//!
//! A trace is an ordered record of a solver's progress, emitted purely for
//! external animation: each snapshot is the partial state after processing
//! one more candidate, with every activity in it tagged by how the solver
//! treated it. Correctness never depends on the trace — the selected subset
//! is authoritative.
//!
//! The renderer maps tags to presentation (e.g., `Examining` → yellow,
//! `Accepted` → green) and replays snapshots with a fixed per-step delay.

use serde::{Deserialize, Serialize};

use super::Activity;

/// How a solver treated an activity at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Highlight {
    /// The activity is the current candidate under consideration.
    Examining,
    /// The activity has been committed to the selected subset.
    Accepted,
}

/// One `(activity, highlight)` pair within a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// The activity being displayed.
    pub activity: Activity,
    /// Its semantic tag at this step.
    pub highlight: Highlight,
}

impl SnapshotEntry {
    /// Tags an activity as the current candidate.
    pub fn examining(activity: Activity) -> Self {
        Self {
            activity,
            highlight: Highlight::Examining,
        }
    }

    /// Tags an activity as committed.
    pub fn accepted(activity: Activity) -> Self {
        Self {
            activity,
            highlight: Highlight::Accepted,
        }
    }
}

/// One solver state: an ordered set of tagged activities.
pub type Snapshot = Vec<SnapshotEntry>;

/// An ordered, finite, non-restartable sequence of snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Snapshots in emission order.
    pub snapshots: Vec<Snapshot>,
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the trace contains no snapshots.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Iterates over snapshots in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }
}

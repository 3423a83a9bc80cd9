//! Selection (solution) model.
//!
//! A selection is the result of one solver invocation: the chosen
//! non-overlapping subset in ascending end-time order, plus the optional
//! step trace for animation. It is a plain value — solvers recompute it on
//! every call and hold no state between calls.

use serde::{Deserialize, Serialize};

use super::{Activity, Trace};

/// The result of an activity-selection solver.
///
/// # Invariant
/// `activities` is ordered by ascending end time and pairwise
/// non-overlapping: for consecutive entries `(a, b)`,
/// `a.end_ms <= b.start_ms`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// The chosen non-overlapping subset, ascending by end time.
    pub activities: Vec<Activity>,
    /// Step trace, present only when the solver was configured to emit one.
    pub trace: Option<Trace>,
}

impl Selection {
    /// Creates an empty selection with no trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected activities.
    pub fn count(&self) -> usize {
        self.activities.len()
    }

    /// Whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Checks the non-overlap invariant over every pair of selected
    /// activities.
    ///
    /// Always true for solver output; exposed so consumers and tests can
    /// verify externally-assembled selections.
    pub fn is_pairwise_disjoint(&self) -> bool {
        for (i, a) in self.activities.iter().enumerate() {
            for b in &self.activities[i + 1..] {
                if a.overlaps(b) {
                    return false;
                }
            }
        }
        true
    }
}

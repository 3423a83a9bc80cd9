//! Brute-force activity selector.
//!
//! # Algorithm
//!
//! Enumerates every subset of the input via a bitmask over `0..2ⁿ`. Each
//! candidate subset is sorted by end time and validated by scanning
//! consecutive pairs; the first largest valid subset found wins (later
//! equal-sized subsets never replace it).
//!
//! Intended as ground truth for small instances. Cost is exponential:
//! callers are expected to bound `n` before invoking it (see
//! [`crate::validation::check_brute_force_bound`]); the `u64` mask itself
//! caps `n` at 63, far beyond anything tractable.
//!
//! # Complexity
//! O(2ⁿ · n log n).

use super::{by_end_time, ActivitySelector};
use crate::models::{Activity, Selection, SnapshotEntry, Trace};
use crate::sort;

/// Exhaustive subset-search selector.
///
/// # Example
///
/// ```
/// use u_interval::models::Activity;
/// use u_interval::selector::{ActivitySelector, BruteForceSelector};
///
/// let activities = vec![Activity::new(0, 10), Activity::new(1, 9)];
/// let selection = BruteForceSelector::new().select(&activities);
/// assert_eq!(selection.count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSelector {
    trace: bool,
}

impl BruteForceSelector {
    /// Creates a selector with tracing disabled.
    pub fn new() -> Self {
        Self { trace: false }
    }

    /// Enables or disables step-trace emission.
    ///
    /// A trace contains one snapshot per examined mask, so enabling it on
    /// an n-activity input allocates 2ⁿ snapshots.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

impl ActivitySelector for BruteForceSelector {
    fn name(&self) -> &'static str {
        "BRUTE_FORCE"
    }

    fn description(&self) -> &'static str {
        "Exhaustive subset search"
    }

    fn select(&self, activities: &[Activity]) -> Selection {
        let n = activities.len();
        let mut trace = self.trace.then(Trace::new);

        if n == 0 {
            return Selection {
                activities: Vec::new(),
                trace,
            };
        }

        let mut best: Vec<Activity> = Vec::new();

        for mask in 0u64..(1u64 << n) {
            let mut subset: Vec<Activity> = activities
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1u64 << i) != 0)
                .map(|(_, a)| a.clone())
                .collect();

            if let Some(trace) = trace.as_mut() {
                // Snapshot the candidate in input order, before sorting.
                trace.push(
                    subset
                        .iter()
                        .cloned()
                        .map(SnapshotEntry::examining)
                        .collect(),
                );
            }

            sort::sort_by(&mut subset, by_end_time);

            let valid = subset.windows(2).all(|w| w[0].end_ms <= w[1].start_ms);
            if valid && subset.len() > best.len() {
                best = subset;
            }
        }

        if let Some(trace) = trace.as_mut() {
            trace.push(best.iter().cloned().map(SnapshotEntry::accepted).collect());
        }

        Selection {
            activities: best,
            trace,
        }
    }
}

//! Dynamic-programming activity selector.
//!
//! # Algorithm
//!
//! Longest non-overlapping chain over the end-time-sorted input:
//!
//! 1. Sort a private copy by ascending end time.
//! 2. `best[i]` = length of the best chain ending at `i` (init 1),
//!    `prev[i]` = predecessor index (init none). For each `i`, try every
//!    earlier `j` whose activity ends at or before `sorted[i]` starts and
//!    keep the strictly better chain.
//! 3. Take the first index with the maximal chain length and follow
//!    predecessor links back, front-inserting so the result comes out in
//!    ascending end-time order.
//!
//! For unit weights this matches the greedy count; the DP formulation is
//! kept because it generalizes to weighted variants.
//!
//! # Complexity
//! O(n²) time, O(n) auxiliary space.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 15 (the
//! longest-increasing-subsequence shape of the recurrence)

use super::{sorted_by_end, ActivitySelector};
use crate::models::{Activity, Selection, Snapshot, SnapshotEntry, Trace};

/// Sentinel for "chain starts here".
const NO_PREDECESSOR: usize = usize::MAX;

/// Longest-chain dynamic-programming selector.
///
/// # Example
///
/// ```
/// use u_interval::models::Activity;
/// use u_interval::selector::{ActivitySelector, DpSelector};
///
/// let activities = vec![Activity::new(0, 6), Activity::new(6, 7)];
/// let selection = DpSelector::new().select(&activities);
/// assert_eq!(selection.count(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DpSelector {
    trace: bool,
}

impl DpSelector {
    /// Creates a selector with tracing disabled.
    pub fn new() -> Self {
        Self { trace: false }
    }

    /// Enables or disables step-trace emission.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

impl ActivitySelector for DpSelector {
    fn name(&self) -> &'static str {
        "DP"
    }

    fn description(&self) -> &'static str {
        "Longest non-overlapping chain (dynamic programming)"
    }

    fn select(&self, activities: &[Activity]) -> Selection {
        let sorted = sorted_by_end(activities);
        let n = sorted.len();
        let mut trace = self.trace.then(Trace::new);

        if n == 0 {
            return Selection {
                activities: Vec::new(),
                trace,
            };
        }

        let mut best = vec![1usize; n];
        let mut prev = vec![NO_PREDECESSOR; n];

        for i in 1..n {
            // One snapshot per examined predecessor, cumulative within
            // this row.
            let mut examined: Snapshot = Vec::new();

            for j in 0..i {
                if let Some(trace) = trace.as_mut() {
                    examined.push(SnapshotEntry::examining(sorted[j].clone()));
                    trace.push(examined.clone());
                }

                if sorted[j].end_ms <= sorted[i].start_ms && best[j] + 1 > best[i] {
                    best[i] = best[j] + 1;
                    prev[i] = j;
                }
            }
        }

        // First maximum wins on ties.
        let mut idx = 0;
        for i in 1..n {
            if best[i] > best[idx] {
                idx = i;
            }
        }

        let mut selected: Vec<Activity> = Vec::new();
        let mut at = idx;
        loop {
            selected.push(sorted[at].clone());
            if prev[at] == NO_PREDECESSOR {
                break;
            }
            at = prev[at];
        }
        selected.reverse();

        if let Some(trace) = trace.as_mut() {
            // Replay the chain root-to-leaf, growing the accepted set.
            let mut accepted: Snapshot = Vec::new();
            for activity in &selected {
                accepted.push(SnapshotEntry::accepted(activity.clone()));
                trace.push(accepted.clone());
            }
        }

        Selection {
            activities: selected,
            trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Highlight;

    fn acts(pairs: &[(i64, i64)]) -> Vec<Activity> {
        pairs.iter().map(|&(s, e)| Activity::new(s, e)).collect()
    }

    #[test]
    fn test_scenario_count_and_order() {
        let activities = acts(&[(1, 3), (2, 4), (3, 5), (0, 6), (5, 7), (8, 9)]);
        let selection = DpSelector::new().select(&activities);

        assert_eq!(selection.count(), 4);
        assert!(selection.is_pairwise_disjoint());
        // Reconstruction front-inserts, so the chain is ascending by end.
        assert!(selection
            .activities
            .windows(2)
            .all(|w| w[0].end_ms <= w[1].start_ms));
    }

    #[test]
    fn test_chain_through_gap() {
        // The longest chain skips the long blocking activity.
        let activities = acts(&[(0, 10), (0, 2), (3, 5), (6, 8)]);
        let selection = DpSelector::new().select(&activities);
        assert_eq!(selection.activities, acts(&[(0, 2), (3, 5), (6, 8)]));
    }

    #[test]
    fn test_single_activity_skips_main_loop() {
        let activities = acts(&[(2, 5)]);
        let selection = DpSelector::new().select(&activities);
        assert_eq!(selection.activities, activities);
    }

    #[test]
    fn test_fully_overlapping_selects_one() {
        let selection = DpSelector::new().select(&acts(&[(0, 10), (1, 9)]));
        assert_eq!(selection.count(), 1);
    }

    #[test]
    fn test_trace_shape() {
        let activities = acts(&[(1, 3), (3, 5), (5, 7)]);
        let selection = DpSelector::new().with_trace(true).select(&activities);
        let trace = selection.trace.unwrap();

        // Examining snapshots: one per inner-loop step, n(n-1)/2 = 3.
        // Accepted snapshots: one per chain node = 3.
        assert_eq!(trace.len(), 6);

        // Row i=1 examines j=0 only.
        assert_eq!(
            trace.snapshots[0],
            vec![SnapshotEntry::examining(Activity::new(1, 3))]
        );
        // Row i=2 restarts and accumulates over j=0..2.
        assert_eq!(trace.snapshots[1].len(), 1);
        assert_eq!(trace.snapshots[2].len(), 2);

        // Accepted snapshots grow root-to-leaf: 1, 2, 3 entries.
        let accepted: Vec<&crate::models::Snapshot> = trace
            .iter()
            .filter(|s| s.iter().all(|e| e.highlight == Highlight::Accepted))
            .collect();
        assert_eq!(accepted.len(), 3);
        assert_eq!(accepted[0].len(), 1);
        assert_eq!(accepted[2].len(), 3);
        assert_eq!(accepted[0][0].activity, Activity::new(1, 3));
    }

    #[test]
    fn test_empty_input_empty_trace() {
        let selection = DpSelector::new().with_trace(true).select(&[]);
        assert!(selection.is_empty());
        assert!(selection.trace.unwrap().is_empty());
    }

    #[test]
    fn test_no_trace_by_default() {
        let selection = DpSelector::new().select(&acts(&[(0, 1)]));
        assert!(selection.trace.is_none());
    }
}

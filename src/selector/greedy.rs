//! Greedy activity selector.
//!
//! # Algorithm
//!
//! 1. Sort a private copy of the input by ascending end time.
//! 2. Scan once, keeping the end of the last accepted activity.
//! 3. Accept every activity that starts at or after that end.
//!
//! Earliest-end-time-first is optimal for the unweighted count objective
//! (exchange argument). When two activities share an end time their
//! relative order after sorting is unspecified but fixed within one call,
//! so the count is always optimal even though the chosen congruent
//! activity may vary.
//!
//! # Complexity
//! O(n log n).
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1

use super::{sorted_by_end, ActivitySelector};
use crate::models::{Activity, Selection, Snapshot, SnapshotEntry, Trace};

/// Earliest-end-time-first selector.
///
/// # Example
///
/// ```
/// use u_interval::models::Activity;
/// use u_interval::selector::{ActivitySelector, GreedySelector};
///
/// let activities = vec![Activity::new(1, 3), Activity::new(2, 4)];
/// let selection = GreedySelector::new().with_trace(true).select(&activities);
/// assert_eq!(selection.count(), 1);
/// assert!(selection.trace.is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySelector {
    trace: bool,
}

impl GreedySelector {
    /// Creates a selector with tracing disabled.
    pub fn new() -> Self {
        Self { trace: false }
    }

    /// Enables or disables step-trace emission.
    ///
    /// Disabled traces cost nothing: no snapshot is allocated and the
    /// returned selection carries `trace: None`.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

impl ActivitySelector for GreedySelector {
    fn name(&self) -> &'static str {
        "GREEDY"
    }

    fn description(&self) -> &'static str {
        "Earliest end time first"
    }

    fn select(&self, activities: &[Activity]) -> Selection {
        let sorted = sorted_by_end(activities);

        let mut selected: Vec<Activity> = Vec::new();
        let mut trace = self.trace.then(Trace::new);
        // Cumulative accepted-set snapshot; each emitted snapshot extends it.
        let mut accepted_set: Snapshot = Vec::new();
        let mut current_end = i64::MIN;

        for activity in sorted {
            if let Some(trace) = trace.as_mut() {
                let mut snapshot = accepted_set.clone();
                snapshot.push(SnapshotEntry::examining(activity.clone()));
                trace.push(snapshot);
            }

            if activity.start_ms >= current_end {
                current_end = activity.end_ms;
                if let Some(trace) = trace.as_mut() {
                    accepted_set.push(SnapshotEntry::accepted(activity.clone()));
                    trace.push(accepted_set.clone());
                }
                selected.push(activity);
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
    fn test_scenario_exact_subset() {
        let activities = acts(&[(1, 3), (2, 4), (3, 5), (0, 6), (5, 7), (8, 9)]);
        let selection = GreedySelector::new().select(&activities);

        // Earliest-end-first commits to (1,3), (3,5), (5,7), (8,9)
        assert_eq!(
            selection.activities,
            acts(&[(1, 3), (3, 5), (5, 7), (8, 9)])
        );
        assert!(selection.is_pairwise_disjoint());
    }

    #[test]
    fn test_back_to_back_all_accepted() {
        let activities = acts(&[(0, 2), (2, 4), (4, 6)]);
        let selection = GreedySelector::new().select(&activities);
        assert_eq!(selection.count(), 3);
    }

    #[test]
    fn test_unsorted_input_handled() {
        let activities = acts(&[(8, 9), (0, 6), (1, 3), (5, 7), (3, 5), (2, 4)]);
        let selection = GreedySelector::new().select(&activities);
        assert_eq!(selection.count(), 4);
    }

    #[test]
    fn test_negative_start_times() {
        // current_end starts below any representable start
        let activities = acts(&[(-10, -5), (-4, 0), (1, 2)]);
        let selection = GreedySelector::new().select(&activities);
        assert_eq!(selection.count(), 3);
    }

    #[test]
    fn test_no_trace_by_default() {
        let selection = GreedySelector::new().select(&acts(&[(1, 3)]));
        assert!(selection.trace.is_none());
    }

    #[test]
    fn test_trace_interleaves_examining_and_accepted() {
        let activities = acts(&[(1, 3), (2, 4), (3, 5), (0, 6), (5, 7), (8, 9)]);
        let selection = GreedySelector::new().with_trace(true).select(&activities);
        let trace = selection.trace.unwrap();

        // One Examining snapshot per candidate plus one Accepted snapshot
        // per acceptance: 6 + 4.
        assert_eq!(trace.len(), 10);

        // First snapshot: the earliest-ending activity under examination.
        assert_eq!(
            trace.snapshots[0],
            vec![SnapshotEntry::examining(Activity::new(1, 3))]
        );
        // Second snapshot: the same activity committed.
        assert_eq!(
            trace.snapshots[1],
            vec![SnapshotEntry::accepted(Activity::new(1, 3))]
        );
        // Third: accepted set plus the next candidate.
        assert_eq!(
            trace.snapshots[2],
            vec![
                SnapshotEntry::accepted(Activity::new(1, 3)),
                SnapshotEntry::examining(Activity::new(2, 4)),
            ]
        );

        // Final snapshot is the full accepted set.
        let last = trace.snapshots.last().unwrap();
        assert_eq!(last.len(), 4);
        assert!(last.iter().all(|e| e.highlight == Highlight::Accepted));
    }

    #[test]
    fn test_empty_input_empty_trace() {
        let selection = GreedySelector::new().with_trace(true).select(&[]);
        assert!(selection.is_empty());
        assert!(selection.trace.unwrap().is_empty());
    }
}

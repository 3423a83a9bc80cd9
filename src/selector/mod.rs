//! Activity-selection solvers.
//!
//! Three independent solvers for the unweighted activity-selection problem:
//! pick a maximum-cardinality subset of pairwise non-overlapping activities
//! from one shared timeline.
//!
//! - [`GreedySelector`]: earliest-end-time-first scan, O(n log n). Optimal
//!   by the classic exchange argument.
//! - [`DpSelector`]: longest non-overlapping chain by dynamic programming,
//!   O(n²). Same count as greedy for unit weights; the formulation
//!   generalizes to weighted variants.
//! - [`BruteForceSelector`]: exhaustive subset search, O(2ⁿ · n log n).
//!   Ground truth for small instances only; see
//!   [`crate::validation::check_brute_force_bound`].
//!
//! Each solver works on a private copy of the input and can optionally emit
//! a step [`crate::models::Trace`] for animation.
//!
//! # Usage
//!
//! ```
//! use u_interval::models::Activity;
//! use u_interval::selector::{ActivitySelector, GreedySelector};
//!
//! let activities = vec![
//!     Activity::new(1, 3),
//!     Activity::new(2, 4),
//!     Activity::new(3, 5),
//! ];
//! let selection = GreedySelector::new().select(&activities);
//! assert_eq!(selection.count(), 2);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1

mod brute;
mod dp;
mod greedy;

pub use brute::BruteForceSelector;
pub use dp::DpSelector;
pub use greedy::GreedySelector;

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::{Activity, Selection};

/// An activity-selection solver.
///
/// Implementations never mutate the caller's slice — each call sorts and
/// scans a private copy — and always return a well-formed [`Selection`]
/// for any input length, including zero.
pub trait ActivitySelector: Send + Sync + Debug {
    /// Solver name (e.g., "GREEDY", "DP").
    fn name(&self) -> &'static str;

    /// Selects a maximum-cardinality non-overlapping subset.
    fn select(&self, activities: &[Activity]) -> Selection;

    /// Solver description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Ascending end-time order, the order every solver schedules in.
pub(crate) fn by_end_time(a: &Activity, b: &Activity) -> Ordering {
    a.end_ms.cmp(&b.end_ms)
}

/// Returns a private copy of the input sorted by ascending end time.
pub(crate) fn sorted_by_end(activities: &[Activity]) -> Vec<Activity> {
    let mut copy = activities.to_vec();
    crate::sort::sort_by(&mut copy, by_end_time);
    copy
}

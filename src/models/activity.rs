//! Activity (interval) model.
//!
//! An activity is a half-open time interval `[start, end)` competing for a
//! single shared timeline. It is the smallest unit the selection solvers
//! operate on; everything else about it (who created it, how it is drawn)
//! belongs to the consumer.
//!
//! # Time Representation
//! Times are milliseconds relative to a caller-defined epoch (t=0). The
//! engine only compares them; the consumer decides what t=0 means
//! (e.g., midnight, shift start) and at what granularity values are produced.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1

use serde::{Deserialize, Serialize};

/// An activity to be scheduled on a shared timeline.
///
/// Callers are responsible for supplying well-formed intervals
/// (`end_ms > start_ms`); see [`crate::validation::validate_activities`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Interval start (ms, inclusive).
    pub start_ms: i64,
    /// Interval end (ms, exclusive).
    pub end_ms: i64,
    /// Optional display label. Carried through selection unchanged.
    #[serde(default)]
    pub name: Option<String>,
}

impl Activity {
    /// Creates a new unnamed activity.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self {
            start_ms,
            end_ms,
            name: None,
        }
    }

    /// Sets the display label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Interval length (end - start) in ms.
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Whether two half-open intervals intersect.
    ///
    /// Back-to-back activities (`a.end_ms == b.start_ms`) do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Activity) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }
}

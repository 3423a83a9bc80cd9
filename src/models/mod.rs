//! Interval scheduling domain models.
//!
//! Core data types for activity-selection problems and their solutions.
//! Solvers consume a slice of [`Activity`] values and produce a
//! [`Selection`]; when tracing is enabled the selection carries a
//! [`Trace`] of per-step [`Snapshot`]s for external animation.

mod activity;
mod selection;
mod trace;

pub use activity::Activity;
pub use selection::Selection;
pub use trace::{Highlight, Snapshot, SnapshotEntry, Trace};

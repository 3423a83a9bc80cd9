//! Interval scheduling framework for the U-Engine ecosystem.
//!
//! Solves the activity-selection problem: from a collection of time-bounded
//! activities on one shared timeline, pick a maximum-cardinality subset
//! with no pairwise overlap. Three independent solvers are provided so
//! consumers can demonstrate, cross-check, and animate them; each can emit
//! an ordered step trace for replay by an external timeline renderer.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Activity`, `Selection`, `Trace`,
//!   `Snapshot`, `Highlight`
//! - **`selector`**: The solvers — `GreedySelector`, `DpSelector`,
//!   `BruteForceSelector` behind the `ActivitySelector` trait
//! - **`sort`**: Generic in-place merge sort used for end-time ordering
//! - **`validation`**: Caller-side input integrity checks and the
//!   brute-force feasibility bound
//!
//! # Architecture
//!
//! The crate is a pure, synchronous engine: solvers are functions of their
//! input, never mutate caller-owned data, and hold no process-wide state.
//! Rendering, input collection, and persistence of the activity list are
//! consumer concerns; the serde derives on the models define the boundary
//! format.
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15-16

pub mod models;
pub mod selector;
pub mod sort;
pub mod validation;

//! # Snapshot Testing Support
//!
//! Runtime checks used by fixture tests alongside `insta` snapshots.
//!
//! - **`invariants`**: link safety, non-empty nodes and lists, no adjacent
//!   text runs

pub mod invariants;

pub use invariants::check as invariants;

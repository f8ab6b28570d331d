//! Output
//!
//! Snapshot generation and JSONL export for external consumers.

pub mod snapshot;
pub mod writer;

pub use snapshot::{generate_snapshot, snapshot, snapshot_agent, SnapshotSchedule};
pub use writer::{OutputError, SnapshotWriter};

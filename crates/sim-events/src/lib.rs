//! Shared snapshot and summary types for the belief simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is the contract between the engine and the tools that plot or
//! analyze the population after each tick.

pub mod snapshot;
pub mod summary;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

// Re-export snapshot types
pub use snapshot::{generate_snapshot_id, AgentSnapshot, PopulationSnapshot};

// Re-export summary types
pub use summary::TickSummary;

//! Sample data fixtures for testing.
//!
//! This module provides ready-made test data for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // sim-events = { path = "../sim-events", features = ["test-fixtures"] }
//!
//! use sim_events::fixtures;
//!
//! let snapshot = fixtures::sample_snapshot();
//! ```

use crate::{PopulationSnapshot, TickSummary};

/// Returns a sample population snapshot from the fixtures file.
///
/// Contains 5 agents at tick 10 with two belief axes:
/// - 2 agents clustered in the upper-left corner (low axis 0, high axis 1)
/// - 1 centrist agent in the middle of the square
/// - 2 agents clustered in the lower-right corner (high axis 0, low axis 1)
pub fn sample_snapshot() -> PopulationSnapshot {
    let json = include_str!("../tests/fixtures/sample_snapshot.json");
    serde_json::from_str(json).expect("Failed to parse sample_snapshot.json")
}

/// Returns a tick summary consistent with [`sample_snapshot`].
pub fn sample_summary() -> TickSummary {
    TickSummary {
        tick: 10,
        velocity_changes: 1,
        isolated_agents: 1,
        interactions: 8,
    }
}

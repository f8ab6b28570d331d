//! Snapshot Generation
//!
//! Converts live agents into the read-only views external consumers plot.

use sim_events::{AgentSnapshot, PopulationSnapshot};

use crate::components::agent::AgentState;
use crate::components::population::Population;

/// Controls when a driver should emit a snapshot
#[derive(Debug, Clone)]
pub struct SnapshotSchedule {
    snapshot_interval: u64,
    snapshots_taken: u64,
    last_snapshot_tick: Option<u64>,
}

impl SnapshotSchedule {
    /// An interval of 0 means only the initial state is captured
    pub fn new(snapshot_interval: u64) -> Self {
        Self {
            snapshot_interval,
            snapshots_taken: 0,
            last_snapshot_tick: None,
        }
    }

    pub fn should_snapshot(&self, current_tick: u64) -> bool {
        if self.last_snapshot_tick == Some(current_tick) {
            return false;
        }
        current_tick == 0
            || (self.snapshot_interval > 0 && current_tick % self.snapshot_interval == 0)
    }

    pub fn mark_snapshot(&mut self, tick: u64) {
        self.last_snapshot_tick = Some(tick);
        self.snapshots_taken += 1;
    }

    pub fn snapshot_count(&self) -> u64 {
        self.snapshots_taken
    }

    pub fn last_snapshot_tick(&self) -> Option<u64> {
        self.last_snapshot_tick
    }
}

/// View of a single agent
pub fn snapshot_agent(agent: &impl AgentState) -> AgentSnapshot {
    AgentSnapshot {
        id: agent.id().0,
        position: agent.position().to_array(),
        beliefs: agent.beliefs().to_vec(),
        influence: agent.influence(),
    }
}

/// Ordered views of every agent in the population
pub fn snapshot(population: &Population) -> Vec<AgentSnapshot> {
    population.iter().map(snapshot_agent).collect()
}

/// Complete snapshot of the population at `tick`
pub fn generate_snapshot(population: &Population, tick: u64) -> PopulationSnapshot {
    PopulationSnapshot::new(tick, snapshot(population))
}

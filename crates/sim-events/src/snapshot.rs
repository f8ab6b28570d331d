//! Snapshot Types
//!
//! Read-only views of the population emitted after each tick.
//!
//! Snapshots are what charting, statistics, and UI collaborators consume.
//! They carry everything needed to plot agents in spatial or belief space
//! and are never fed back into the simulation.

use serde::{Deserialize, Serialize};

/// Generates a snapshot ID with the given tick number.
pub fn generate_snapshot_id(tick: u64) -> String {
    format!("snap_{:06}", tick)
}

/// One agent as seen by an external consumer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: u64,
    /// Spatial position, each coordinate in [0, 1]
    pub position: [f32; 2],
    /// Belief on each axis, each in [0, 1]
    pub beliefs: Vec<f32>,
    pub influence: f32,
}

impl AgentSnapshot {
    /// Belief on the given axis, if the agent has that many axes
    pub fn belief(&self, axis: usize) -> Option<f32> {
        self.beliefs.get(axis).copied()
    }
}

/// Ordered view of the whole population at a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    pub snapshot_id: String,
    pub tick: u64,
    pub agents: Vec<AgentSnapshot>,
}

impl PopulationSnapshot {
    pub fn new(tick: u64, agents: Vec<AgentSnapshot>) -> Self {
        Self {
            snapshot_id: generate_snapshot_id(tick),
            tick,
            agents,
        }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Column of positions in population order, for spatial plots
    pub fn positions(&self) -> Vec<[f32; 2]> {
        self.agents.iter().map(|a| a.position).collect()
    }

    /// Column of beliefs on one axis in population order.
    ///
    /// Agents without that axis are skipped, so the column may be shorter
    /// than the population.
    pub fn belief_axis(&self, axis: usize) -> Vec<f32> {
        self.agents.iter().filter_map(|a| a.belief(axis)).collect()
    }

    /// Column of influence values in population order
    pub fn influences(&self) -> Vec<f32> {
        self.agents.iter().map(|a| a.influence).collect()
    }

    /// Find an agent by id
    pub fn agent(&self, id: u64) -> Option<&AgentSnapshot> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Serialize to a single JSON line
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from a single JSON line
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

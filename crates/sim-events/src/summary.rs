//! Tick Summary
//!
//! Per-tick counters reported by the step engine.

use serde::{Deserialize, Serialize};

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSummary {
    /// Tick number this summary describes (1 for the first step)
    pub tick: u64,
    /// Agents whose velocity was resampled this tick
    pub velocity_changes: usize,
    /// Agents that found no interaction partner this tick
    pub isolated_agents: usize,
    /// Number of pairwise belief interactions applied
    pub interactions: usize,
}

impl TickSummary {
    pub fn new(tick: u64) -> Self {
        Self {
            tick,
            ..Self::default()
        }
    }

    /// Accumulate another tick's counters into a running total
    pub fn absorb(&mut self, other: &TickSummary) {
        self.tick = self.tick.max(other.tick);
        self.velocity_changes += other.velocity_changes;
        self.isolated_agents += other.isolated_agents;
        self.interactions += other.interactions;
    }
}

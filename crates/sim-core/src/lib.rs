//! Spatial Belief Dynamics Engine
//!
//! Agents drift around the unit square, meet nearby and like-minded
//! neighbors, and pull each other's political beliefs while a slow force
//! draws each agent back toward its original values.
//!
//! The library exposes the per-tick engine plus the pieces a driver needs:
//! [`initialize`] builds a population, [`step`] advances it one tick, and
//! [`snapshot`] produces the read-only view consumed by plots and statistics.

use rand::rngs::SmallRng;

pub mod components;
pub mod config;
pub mod engine;
pub mod output;
pub mod setup;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::{Config, ConfigError, NeighborWeighting, DEFAULT_TUNING_PATH};
pub use engine::step;
pub use output::{generate_snapshot, snapshot, SnapshotSchedule, SnapshotWriter};
pub use setup::{initialize, initialize_with_rng};
pub use simulation::Simulation;

pub use sim_events::{AgentSnapshot, PopulationSnapshot, TickSummary};

/// Seeded random number generator owned by a run
#[derive(Debug)]
pub struct SimRng(pub SmallRng);

//! Simulation Driver State
//!
//! Bundles a config, its population, the seeded generator, and a tick
//! counter so a driver can step, run, reset, and snapshot a run.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use sim_events::{PopulationSnapshot, TickSummary};

use crate::components::population::Population;
use crate::config::{Config, ConfigError};
use crate::engine;
use crate::output::generate_snapshot;
use crate::setup;
use crate::SimRng;

/// One independent simulation run
#[derive(Debug)]
pub struct Simulation {
    config: Config,
    population: Population,
    population_size: usize,
    seed: u64,
    rng: SimRng,
    tick: u64,
}

impl Simulation {
    /// Validate `config` and build the initial population.
    ///
    /// One generator seeded from `seed` drives both initialization and every
    /// later tick, so the same inputs always replay the same run.
    pub fn new(config: Config, population_size: usize, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = SimRng(SmallRng::seed_from_u64(seed));
        let population = setup::initialize_with_rng(&config, population_size, &mut rng.0)?;

        Ok(Self {
            config,
            population,
            population_size,
            seed,
            rng,
            tick: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Ticks completed since the last (re)initialization
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance one tick
    pub fn step(&mut self) -> TickSummary {
        // The config was validated in `new` and cannot change afterwards
        let mut summary = engine::advance(&mut self.population, &self.config, &mut self.rng.0);
        self.tick += 1;
        summary.tick = self.tick;

        tracing::debug!(
            tick = summary.tick,
            interactions = summary.interactions,
            isolated = summary.isolated_agents,
            velocity_changes = summary.velocity_changes,
            "Tick complete"
        );
        summary
    }

    /// Advance `ticks` ticks and return the accumulated counters
    pub fn run(&mut self, ticks: u64) -> TickSummary {
        let mut total = TickSummary::new(self.tick);
        for _ in 0..ticks {
            let summary = self.step();
            total.absorb(&summary);
        }
        total
    }

    /// Rebuild the initial population from the same seed and restart at tick 0
    pub fn reset(&mut self) {
        self.rng = SimRng(SmallRng::seed_from_u64(self.seed));
        // The config was validated in `new` and cannot change afterwards
        setup::populate(
            &mut self.population,
            &self.config,
            self.population_size,
            &mut self.rng.0,
        );
        self.tick = 0;
        tracing::info!(seed = self.seed, agents = self.population_size, "Simulation reset");
    }

    /// Switch to a new seed and reset
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.reset();
    }

    /// Read-only view of the current state
    pub fn snapshot(&self) -> PopulationSnapshot {
        generate_snapshot(&self.population, self.tick)
    }
}

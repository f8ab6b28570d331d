//! Agent Spawning
//!
//! Builds a population with random beliefs, anchored values, and influence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::components::agent::{Agent, AgentId, Vec2};
use crate::components::population::Population;
use crate::config::{Config, ConfigError};

/// Draw influence from `share * U(0,1) + (1 - share)`.
///
/// With `share` in [0, 1) the result lies in [1 - share, 1] and is always
/// positive.
pub fn generate_influence<R: Rng>(rng: &mut R, share: f32) -> f32 {
    share * rng.gen::<f32>() + (1.0 - share)
}

/// Create one agent with freshly drawn beliefs
pub fn spawn_agent<R: Rng>(config: &Config, id: AgentId, rng: &mut R) -> Agent {
    // Beliefs first; they double as the permanent value anchor
    let beliefs: Vec<f32> = (0..config.belief_axis_count).map(|_| rng.gen()).collect();
    let influence = generate_influence(rng, config.random_influence_share);

    let position = if config.partisan_position && config.has_belief_plane() {
        // Seat the agent by ideology
        Vec2::new(beliefs[0], beliefs[1])
    } else {
        Vec2::new(rng.gen(), rng.gen())
    };

    Agent::new(id, position, beliefs, influence)
}

/// Discard the current agents and fill the population with `count` new ones.
///
/// Ids restart at 0. The config must already be validated.
pub fn populate<R: Rng>(population: &mut Population, config: &Config, count: usize, rng: &mut R) {
    population.clear();
    for _ in 0..count {
        population.spawn(|id| spawn_agent(config, id, rng));
    }
}

/// Validate the config and build a population of `count` agents from `seed`
pub fn initialize(config: &Config, count: usize, seed: u64) -> Result<Population, ConfigError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    initialize_with_rng(config, count, &mut rng)
}

/// Validate the config and build a population drawing from an existing generator
pub fn initialize_with_rng<R: Rng>(
    config: &Config,
    count: usize,
    rng: &mut R,
) -> Result<Population, ConfigError> {
    config.validate()?;

    let mut population = Population::new();
    populate(&mut population, config, count, rng);

    tracing::info!(
        agents = count,
        belief_axes = config.belief_axis_count,
        partisan = config.partisan_position,
        "Population initialized"
    );
    Ok(population)
}

//! Step Engine
//!
//! Advances a population by exactly one tick.
//!
//! Phase order within a tick:
//! 1. Motion integration and value restoration, agent by agent
//! 2. Neighbor selection against a copy of the population taken after phase 1
//! 3. Pairwise interactions, applied one at a time to the live population

use rand::Rng;
use sim_events::TickSummary;

use crate::components::agent::AgentState;
use crate::components::population::Population;
use crate::config::{Config, ConfigError};
use crate::systems::{integrate_motion, interact, restore_beliefs, NeighborSampler};

/// Run one tick over `population`.
///
/// `config` is validated first and an invalid one leaves the population
/// untouched. The returned summary has `tick` set to 0; callers that count
/// ticks fill it in. Population membership is never changed.
pub fn step<R: Rng>(
    population: &mut Population,
    config: &Config,
    rng: &mut R,
) -> Result<TickSummary, ConfigError> {
    config.validate()?;
    Ok(advance(population, config, rng))
}

/// One tick with a config already known to be valid
pub(crate) fn advance<R: Rng>(
    population: &mut Population,
    config: &Config,
    rng: &mut R,
) -> TickSummary {
    let mut summary = TickSummary::default();

    // Phase 1: each agent only touches its own state
    for agent in population.agents_mut() {
        if integrate_motion(agent, config, rng) {
            summary.velocity_changes += 1;
        }
        restore_beliefs(agent, config.value_effect);
    }

    // Nobody to meet
    let size = population.len();
    if size <= 1 {
        summary.isolated_agents = size;
        tracing::trace!(agents = size, "Population too small for interactions");
        return summary;
    }

    // Phase 2 + 3: evaluate candidates on a stable view, mutate the live agents
    let view = population.agents().to_vec();
    let sampler = NeighborSampler::new(config, size);

    for focal in 0..size {
        let candidates = sampler.candidates(&view, focal, rng);
        if candidates.is_empty() {
            summary.isolated_agents += 1;
            tracing::trace!(agent = %view[focal].id(), "No interaction candidates");
            continue;
        }

        for _ in 0..config.interactions_per_step {
            let Some(partner) = candidates.draw(rng) else {
                break;
            };
            if let Some((agent, other)) = population.pair_mut(focal, partner) {
                interact(agent, other, config);
                summary.interactions += 1;
            }
        }
    }

    summary
}

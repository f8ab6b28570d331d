//! Movement System
//!
//! Velocity resampling and position integration, one agent at a time.

use rand::Rng;

use crate::components::agent::{Agent, AgentState, Vec2};
use crate::config::Config;

/// Draw a new velocity for an agent.
///
/// A random direction is blended with a pull toward the point given by the
/// agent's first two beliefs, then scaled by the velocity multiplier. The
/// belief pull is skipped when there are fewer than two axes.
pub fn sample_velocity<R: Rng>(agent: &Agent, config: &Config, rng: &mut R) -> Vec2 {
    let random = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5);
    let mut velocity = random * (1.0 - config.belief_velocity_weight);

    if config.has_belief_plane() {
        let beliefs = agent.beliefs();
        let pull = Vec2::new(beliefs[0] - 0.5, beliefs[1] - 0.5);
        velocity += pull * config.belief_velocity_weight;
    }

    velocity * config.velocity_multiplier
}

/// Possibly resample the velocity, then move.
///
/// Returns whether the velocity was resampled. A velocity that is not
/// resampled carries over from the previous tick.
pub fn integrate_motion<R: Rng>(agent: &mut Agent, config: &Config, rng: &mut R) -> bool {
    let changed = rng.gen_bool(f64::from(config.change_velocity_probability));
    if changed {
        let velocity = sample_velocity(agent, config, rng);
        agent.set_velocity(velocity);
    }

    agent.integrate_position();
    changed
}

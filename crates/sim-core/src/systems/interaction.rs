//! Interaction System
//!
//! The pairwise belief-transfer rule.
//!
//! Each side compares its partner's belief against a baseline that blends
//! its own belief with the neutral midpoint (weighted by `extreme_bias`),
//! and moves by `interaction_effect` of the gap scaled by the partner's
//! relative influence. Both sides update from the pre-interaction values,
//! and the update is not conservative.

use crate::components::agent::{Agent, AgentState};
use crate::config::Config;

/// Baseline against which a partner's belief is compared
pub fn baseline(own: f32, extreme_bias: f32) -> f32 {
    0.5 * extreme_bias + own * (1.0 - extreme_bias)
}

/// New belief for one side of an interaction, clamped into [0, 1].
///
/// `influence_ratio` is partner influence over own influence.
pub fn shifted_belief(
    own: f32,
    partner: f32,
    influence_ratio: f32,
    extreme_bias: f32,
    interaction_effect: f32,
) -> f32 {
    let delta = interaction_effect * (partner - baseline(own, extreme_bias));
    (own + delta * influence_ratio).clamp(0.0, 1.0)
}

/// Apply one interaction between `agent` and `partner` on every belief axis
pub fn interact(agent: &mut Agent, partner: &mut Agent, config: &Config) {
    // Influence is fixed and positive, so both ratios are finite
    let toward_agent = partner.influence() / agent.influence();
    let toward_partner = agent.influence() / partner.influence();

    let axes = agent.axis_count().min(partner.axis_count());
    for axis in 0..axes {
        let a = agent.beliefs()[axis];
        let o = partner.beliefs()[axis];

        agent.set_belief(
            axis,
            shifted_belief(a, o, toward_agent, config.extreme_bias, config.interaction_effect),
        );
        partner.set_belief(
            axis,
            shifted_belief(o, a, toward_partner, config.extreme_bias, config.interaction_effect),
        );
    }
}

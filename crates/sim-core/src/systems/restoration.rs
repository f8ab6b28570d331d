//! Restoration System
//!
//! Pulls each belief back toward the agent's value anchor.

use crate::components::agent::Agent;

/// Close `value_effect` of the gap between every belief and its anchor.
///
/// Results are clamped into [0, 1].
pub fn restore_beliefs(agent: &mut Agent, value_effect: f32) {
    if value_effect == 0.0 {
        return;
    }

    let (beliefs, values) = agent.beliefs_and_values_mut();
    for (belief, value) in beliefs.iter_mut().zip(values) {
        *belief = (*belief + value_effect * (value - *belief)).clamp(0.0, 1.0);
    }
}

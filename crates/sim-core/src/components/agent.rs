//! Agent Components
//!
//! Per-agent state: position, velocity, beliefs, value anchors, influence.

use std::ops::{Add, AddAssign, Mul, Sub};

use thiserror::Error;

/// Unique identifier for an agent, assigned by its population
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgentId(pub u64);

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "agent_{:04}", self.0)
    }
}

/// A point or displacement in the simulation plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn distance_squared(self, other: Vec2) -> f32 {
        (self - other).length_squared()
    }

    /// Clamp both coordinates into the unit square
    pub fn clamp_unit(self) -> Self {
        Self {
            x: self.x.clamp(0.0, 1.0),
            y: self.y.clamp(0.0, 1.0),
        }
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Read access shared by anything that behaves like an agent.
///
/// Snapshot builders and plotting collaborators work against this trait
/// rather than the concrete [`Agent`].
pub trait AgentState {
    fn id(&self) -> AgentId;
    fn position(&self) -> Vec2;
    fn beliefs(&self) -> &[f32];
    fn values(&self) -> &[f32];
    fn influence(&self) -> f32;
}

/// A single member of the population.
///
/// `id`, `values`, and `influence` are fixed at creation. Position and
/// beliefs stay inside [0, 1] after every mutation the engine performs.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    id: AgentId,
    position: Vec2,
    velocity: Vec2,
    beliefs: Vec<f32>,
    values: Vec<f32>,
    influence: f32,
}

/// Errors raised when building an agent by hand
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgentError {
    #[error("influence {0} must be finite and positive")]
    InvalidInfluence(f32),
}

impl Agent {
    /// Create an agent at rest whose value anchor is a copy of its beliefs.
    ///
    /// Position and beliefs are clamped into [0, 1]. Influence divides the
    /// interaction rule, so anything not finite and positive is rejected.
    pub fn try_new(
        id: AgentId,
        position: Vec2,
        beliefs: Vec<f32>,
        influence: f32,
    ) -> Result<Self, AgentError> {
        if !influence.is_finite() || influence <= 0.0 {
            return Err(AgentError::InvalidInfluence(influence));
        }
        Ok(Self::new(id, position, beliefs, influence))
    }

    /// Unchecked constructor for callers that already hold a positive influence
    pub(crate) fn new(id: AgentId, position: Vec2, beliefs: Vec<f32>, influence: f32) -> Self {
        debug_assert!(influence > 0.0, "influence must be positive");
        let beliefs: Vec<f32> = beliefs.into_iter().map(|b| b.clamp(0.0, 1.0)).collect();
        Self {
            id,
            position: position.clamp_unit(),
            velocity: Vec2::ZERO,
            values: beliefs.clone(),
            beliefs,
            influence,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn axis_count(&self) -> usize {
        self.beliefs.len()
    }

    pub(crate) fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Advance by the current velocity, stopping at the walls
    pub(crate) fn integrate_position(&mut self) {
        self.position = (self.position + self.velocity).clamp_unit();
    }

    /// Overwrite one belief, clamped into [0, 1]
    pub(crate) fn set_belief(&mut self, axis: usize, value: f32) {
        self.beliefs[axis] = value.clamp(0.0, 1.0);
    }

    /// Beliefs and their matching anchors, for in-place restoration
    pub(crate) fn beliefs_and_values_mut(&mut self) -> (&mut [f32], &[f32]) {
        (&mut self.beliefs, &self.values)
    }
}

impl AgentState for Agent {
    fn id(&self) -> AgentId {
        self.id
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn beliefs(&self) -> &[f32] {
        &self.beliefs
    }

    fn values(&self) -> &[f32] {
        &self.values
    }

    fn influence(&self) -> f32 {
        self.influence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_agent_anchors_values_to_beliefs() {
        let agent = Agent::new(AgentId(3), Vec2::new(0.2, 0.4), vec![0.1, 0.9], 0.8);
        assert_eq!(agent.values(), agent.beliefs());
        assert_eq!(agent.velocity(), Vec2::ZERO);
        assert_eq!(agent.id().to_string(), "agent_0003");
    }

    #[test]
    fn test_try_new_rejects_bad_influence() {
        for influence in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            let result = Agent::try_new(AgentId(0), Vec2::ZERO, vec![0.2, 0.2], influence);
            assert!(
                matches!(result, Err(AgentError::InvalidInfluence(_))),
                "influence {} accepted",
                influence
            );
        }

        let agent = Agent::try_new(AgentId(1), Vec2::ZERO, vec![0.8, 0.8], 0.5).unwrap();
        assert_eq!(agent.influence(), 0.5);
    }

    #[test]
    fn test_new_agent_clamps_inputs() {
        let agent = Agent::new(AgentId(0), Vec2::new(-1.0, 2.0), vec![1.5, -0.5], 1.0);
        assert_eq!(agent.position(), Vec2::new(0.0, 1.0));
        assert_eq!(agent.beliefs(), &[1.0, 0.0]);
    }

    #[test]
    fn test_integrate_position_stops_at_walls() {
        let mut agent = Agent::new(AgentId(0), Vec2::new(0.95, 0.02), vec![0.5], 1.0)
            .with_velocity(Vec2::new(0.1, -0.1));
        agent.integrate_position();
        assert_eq!(agent.position(), Vec2::new(1.0, 0.0));

        // Velocity survives the clamp, so the agent stays pinned
        agent.integrate_position();
        assert_eq!(agent.position(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_set_belief_clamps_and_keeps_values() {
        let mut agent = Agent::new(AgentId(0), Vec2::ZERO, vec![0.5], 1.0);
        agent.set_belief(0, 1.7);
        assert_eq!(agent.beliefs(), &[1.0]);
        assert_eq!(agent.values(), &[0.5]);
    }

    #[test]
    fn test_vec2_ops() {
        let a = Vec2::new(0.5, 0.25);
        let b = Vec2::new(0.25, 0.25);
        assert_eq!(a - b, Vec2::new(0.25, 0.0));
        assert_eq!(a * 2.0, Vec2::new(1.0, 0.5));
        assert_eq!(a.distance_squared(b), 0.0625);
    }
}

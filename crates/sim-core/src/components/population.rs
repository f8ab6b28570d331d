//! Population Components
//!
//! The ordered agent collection and the id allocator it owns.

use super::agent::{Agent, AgentId, AgentState};

/// Hands out contiguous, 0-based agent ids.
///
/// Each population owns its own allocator, so independent simulations in
/// one process never collide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> AgentId {
        let id = AgentId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }
}

/// Ordered sequence of agents.
///
/// Order only fixes iteration; it carries no priority. Membership never
/// changes while stepping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    agents: Vec<Agent>,
    ids: IdAllocator,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an agent built from the next id
    pub fn spawn(&mut self, build: impl FnOnce(AgentId) -> Agent) -> AgentId {
        let id = self.ids.next_id();
        self.agents.push(build(id));
        id
    }

    /// Drop every agent and restart ids at 0
    pub fn clear(&mut self) {
        self.agents.clear();
        self.ids.reset();
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn get(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    pub fn find(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub(crate) fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// Mutable access to two distinct agents at once
    pub(crate) fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Agent, &mut Agent)> {
        if a == b || a >= self.agents.len() || b >= self.agents.len() {
            return None;
        }
        if a < b {
            let (head, tail) = self.agents.split_at_mut(b);
            Some((&mut head[a], &mut tail[0]))
        } else {
            let (head, tail) = self.agents.split_at_mut(a);
            Some((&mut tail[0], &mut head[b]))
        }
    }

    pub fn id_allocator(&self) -> &IdAllocator {
        &self.ids
    }
}

impl FromIterator<Agent> for Population {
    /// Build a population from ready-made agents.
    ///
    /// The allocator resumes after the highest id present, so later spawns
    /// stay unique.
    fn from_iter<I: IntoIterator<Item = Agent>>(iter: I) -> Self {
        let agents: Vec<Agent> = iter.into_iter().collect();
        let next = agents.iter().map(|a| a.id().0 + 1).max().unwrap_or(0);
        Self {
            agents,
            ids: IdAllocator { next },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::agent::Vec2;

    fn spawn_at(population: &mut Population, belief: f32) -> AgentId {
        population.spawn(|id| Agent::new(id, Vec2::ZERO, vec![belief], 1.0))
    }

    #[test]
    fn test_ids_are_contiguous_from_zero() {
        let mut population = Population::new();
        let ids: Vec<AgentId> = (0..4).map(|_| spawn_at(&mut population, 0.5)).collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2), AgentId(3)]);
        assert_eq!(population.id_allocator().issued(), 4);
    }

    #[test]
    fn test_clear_restarts_ids() {
        let mut population = Population::new();
        spawn_at(&mut population, 0.1);
        spawn_at(&mut population, 0.2);
        population.clear();

        assert!(population.is_empty());
        assert_eq!(spawn_at(&mut population, 0.3), AgentId(0));
    }

    #[test]
    fn test_allocators_are_independent() {
        let mut first = Population::new();
        let mut second = Population::new();
        spawn_at(&mut first, 0.1);
        spawn_at(&mut first, 0.2);

        assert_eq!(spawn_at(&mut second, 0.3), AgentId(0));
    }

    #[test]
    fn test_pair_mut_either_order() {
        let mut population = Population::new();
        spawn_at(&mut population, 0.1);
        spawn_at(&mut population, 0.9);

        let (a, b) = population.pair_mut(1, 0).unwrap();
        assert_eq!(a.id(), AgentId(1));
        assert_eq!(b.id(), AgentId(0));

        assert!(population.pair_mut(0, 0).is_none());
        assert!(population.pair_mut(0, 5).is_none());
    }

    #[test]
    fn test_from_iter_resumes_allocator() {
        let mut population: Population = vec![
            Agent::new(AgentId(0), Vec2::ZERO, vec![0.2], 1.0),
            Agent::new(AgentId(1), Vec2::ZERO, vec![0.8], 1.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(spawn_at(&mut population, 0.5), AgentId(2));
        assert_eq!(population.find(AgentId(1)).map(|a| a.beliefs()[0]), Some(0.8));
    }
}

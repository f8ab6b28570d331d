//! Neighbor Selection
//!
//! Builds each agent's interaction candidates from spatial proximity and
//! belief similarity, then draws partners from them.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::components::agent::AgentState;
use crate::config::{Config, NeighborWeighting};

/// Constants for candidate weighting
pub mod neighbor_constants {
    /// Smallest weight a distance-weighted candidate can have, so agents on
    /// the edge of the radius stay drawable
    pub const MIN_DISTANCE_WEIGHT: f32 = 0.05;
}

/// Probability that a belief-distant candidate passes the homophily filter.
///
/// `belief_distance` is the root-mean-square distance in [0, 1].
pub fn homophily_probability(belief_distance: f32, belief_filter: f32) -> f32 {
    ((1.0 - belief_distance) / belief_filter).clamp(0.0, 1.0)
}

/// Root-mean-square distance between two belief vectors
pub fn belief_distance(a: &[f32], b: &[f32]) -> f32 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    let sum: f32 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    (sum / n as f32).sqrt()
}

/// Surviving candidates for one agent and the distribution over them
#[derive(Debug, Clone)]
pub struct Candidates {
    indices: Vec<usize>,
    distribution: Option<WeightedIndex<f32>>,
}

impl Candidates {
    fn from_weighted(indices: Vec<usize>, weights: &[f32]) -> Self {
        // Empty or degenerate weights leave nothing to draw from
        let distribution = WeightedIndex::new(weights).ok();
        Self {
            indices,
            distribution,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.distribution.is_none()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Population indices of the candidates, in population order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Draw one partner index, with replacement
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        self.distribution
            .as_ref()
            .map(|dist| self.indices[dist.sample(rng)])
    }
}

/// Evaluates candidates for every agent of a tick.
///
/// The acceptance radius is `interaction_radius / N`, so expected
/// neighborhood size stays roughly constant as the population grows.
#[derive(Debug, Clone)]
pub struct NeighborSampler<'a> {
    config: &'a Config,
    threshold: f32,
}

impl<'a> NeighborSampler<'a> {
    pub fn new(config: &'a Config, population_size: usize) -> Self {
        // A lone agent (or none) has nobody to meet
        let threshold = if population_size <= 1 {
            0.0
        } else {
            config.interaction_radius / population_size as f32
        };
        Self { config, threshold }
    }

    /// Squared-distance threshold in use
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Spatial filter: within the shrinking radius
    pub fn within_radius(&self, distance_squared: f32) -> bool {
        self.threshold > 0.0 && distance_squared <= self.threshold
    }

    /// Build the candidate set for the agent at `focal`.
    ///
    /// `agents` must be a consistent view of the population; the engine
    /// passes the state as of the start of the interaction phase.
    pub fn candidates<A: AgentState, R: Rng>(
        &self,
        agents: &[A],
        focal: usize,
        rng: &mut R,
    ) -> Candidates {
        let mut indices = Vec::new();
        let mut weights = Vec::new();

        let Some(me) = agents.get(focal) else {
            return Candidates::from_weighted(indices, &weights);
        };
        if self.threshold <= 0.0 {
            return Candidates::from_weighted(indices, &weights);
        }

        for (index, other) in agents.iter().enumerate() {
            if index == focal {
                continue;
            }

            let d2 = me.position().distance_squared(other.position());
            if !self.within_radius(d2) {
                continue;
            }

            if self.config.belief_filter > 0.0 {
                let distance = belief_distance(me.beliefs(), other.beliefs());
                let p = homophily_probability(distance, self.config.belief_filter);
                if !rng.gen_bool(f64::from(p)) {
                    continue;
                }
            }

            indices.push(index);
            weights.push(self.weight(d2));
        }

        Candidates::from_weighted(indices, &weights)
    }

    fn weight(&self, distance_squared: f32) -> f32 {
        match self.config.neighbor_weighting {
            NeighborWeighting::Uniform => 1.0,
            NeighborWeighting::Distance => (1.0 - distance_squared / self.threshold)
                .max(neighbor_constants::MIN_DISTANCE_WEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::agent::{Agent, AgentId, Vec2};
    use rand::rngs::SmallRng;
    use rand::{RngCore, SeedableRng};

    fn agent(id: u64, x: f32, y: f32, beliefs: Vec<f32>) -> Agent {
        Agent::new(AgentId(id), Vec2::new(x, y), beliefs, 1.0)
    }

    /// Generator that panics if anything draws from it
    struct NoDraws;

    impl RngCore for NoDraws {
        fn next_u32(&mut self) -> u32 {
            panic!("unexpected random draw")
        }
        fn next_u64(&mut self) -> u64 {
            panic!("unexpected random draw")
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("unexpected random draw")
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            panic!("unexpected random draw")
        }
    }

    #[test]
    fn test_homophily_probability() {
        assert_eq!(homophily_probability(0.0, 0.5), 1.0);
        assert_eq!(homophily_probability(1.0, 0.5), 0.0);
        assert!((homophily_probability(0.8, 0.5) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_threshold_shrinks_with_population() {
        let config = Config::default();
        assert_eq!(NeighborSampler::new(&config, 4).threshold(), 0.25);
        assert_eq!(NeighborSampler::new(&config, 100).threshold(), 0.01);
        assert_eq!(NeighborSampler::new(&config, 1).threshold(), 0.0);
        assert_eq!(NeighborSampler::new(&config, 0).threshold(), 0.0);
    }

    #[test]
    fn test_spatial_filter_only_when_belief_filter_off() {
        let config = Config {
            belief_filter: 0.0,
            ..Config::default()
        };
        // threshold = 1 / 3
        let agents = vec![
            agent(0, 0.5, 0.5, vec![0.0, 0.0]),
            agent(1, 0.6, 0.5, vec![1.0, 1.0]),
            agent(2, 1.0, 1.0, vec![0.0, 0.0]),
        ];
        let sampler = NeighborSampler::new(&config, agents.len());

        // Belief-opposite neighbor is kept; the far corner is out of range.
        // No random draw may happen while filtering.
        let candidates = sampler.candidates(&agents, 0, &mut NoDraws);
        assert_eq!(candidates.indices(), &[1]);
    }

    #[test]
    fn test_opposed_beliefs_always_rejected() {
        let config = Config::default();
        let agents = vec![
            agent(0, 0.5, 0.5, vec![0.0, 0.0]),
            agent(1, 0.5, 0.5, vec![1.0, 1.0]),
        ];
        let sampler = NeighborSampler::new(&config, agents.len());
        let mut rng = SmallRng::seed_from_u64(1);

        for _ in 0..100 {
            assert!(sampler.candidates(&agents, 0, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_similar_beliefs_always_accepted() {
        let config = Config::default();
        // distance 0.4 -> p = 0.6 / 0.5 clamped to 1
        let agents = vec![
            agent(0, 0.5, 0.5, vec![0.3, 0.3]),
            agent(1, 0.5, 0.5, vec![0.7, 0.7]),
        ];
        let sampler = NeighborSampler::new(&config, agents.len());
        let mut rng = SmallRng::seed_from_u64(2);

        for _ in 0..100 {
            assert_eq!(sampler.candidates(&agents, 0, &mut rng).indices(), &[1]);
        }
    }

    #[test]
    fn test_partial_homophily_acceptance_rate() {
        let config = Config::default();
        // distance 0.8 -> p = 0.2 / 0.5 = 0.4
        let agents = vec![
            agent(0, 0.5, 0.5, vec![0.1, 0.1]),
            agent(1, 0.5, 0.5, vec![0.9, 0.9]),
        ];
        let sampler = NeighborSampler::new(&config, agents.len());
        let mut rng = SmallRng::seed_from_u64(17);

        let trials = 4000;
        let accepted = (0..trials)
            .filter(|_| !sampler.candidates(&agents, 0, &mut rng).is_empty())
            .count();
        let rate = accepted as f32 / trials as f32;
        assert!((rate - 0.4).abs() < 0.05, "acceptance rate {}", rate);
    }

    #[test]
    fn test_zero_radius_rejects_even_coincident_agents() {
        let config = Config {
            interaction_radius: 0.0,
            belief_filter: 0.0,
            ..Config::default()
        };
        let agents = vec![
            agent(0, 0.5, 0.5, vec![0.5]),
            agent(1, 0.5, 0.5, vec![0.5]),
        ];
        let sampler = NeighborSampler::new(&config, agents.len());
        assert!(sampler.candidates(&agents, 0, &mut NoDraws).is_empty());
    }

    #[test]
    fn test_single_agent_has_no_candidates() {
        let config = Config::default();
        let agents = vec![agent(0, 0.5, 0.5, vec![0.5])];
        let sampler = NeighborSampler::new(&config, 1);
        let candidates = sampler.candidates(&agents, 0, &mut NoDraws);
        assert!(candidates.is_empty());
        assert_eq!(candidates.draw(&mut NoDraws), None);
    }

    #[test]
    fn test_draw_with_replacement_covers_candidates() {
        let config = Config {
            belief_filter: 0.0,
            ..Config::default()
        };
        let agents = vec![
            agent(0, 0.5, 0.5, vec![0.5]),
            agent(1, 0.55, 0.5, vec![0.5]),
            agent(2, 0.5, 0.55, vec![0.5]),
        ];
        let sampler = NeighborSampler::new(&config, agents.len());
        let mut rng = SmallRng::seed_from_u64(3);
        let candidates = sampler.candidates(&agents, 0, &mut rng);

        let mut seen = [0usize; 3];
        for _ in 0..200 {
            let index = candidates.draw(&mut rng).unwrap();
            seen[index] += 1;
        }
        assert_eq!(seen[0], 0);
        assert!(seen[1] > 50);
        assert!(seen[2] > 50);
    }

    #[test]
    fn test_distance_weighting_prefers_closer() {
        let config = Config {
            belief_filter: 0.0,
            neighbor_weighting: NeighborWeighting::Distance,
            ..Config::default()
        };
        // threshold = 1 / 3; near d2 = 0.0001, far d2 = 0.3
        let agents = vec![
            agent(0, 0.2, 0.2, vec![0.5]),
            agent(1, 0.21, 0.2, vec![0.5]),
            agent(2, 0.2, 0.7477, vec![0.5]),
        ];
        let sampler = NeighborSampler::new(&config, agents.len());
        let mut rng = SmallRng::seed_from_u64(4);
        let candidates = sampler.candidates(&agents, 0, &mut rng);
        assert_eq!(candidates.indices(), &[1, 2]);

        let near = (0..1000)
            .filter(|_| candidates.draw(&mut rng) == Some(1))
            .count();
        assert!(near > 700, "near partner drawn {} times", near);
    }

    #[test]
    fn test_belief_distance_is_rms() {
        assert_eq!(belief_distance(&[0.5, 0.5], &[0.5, 0.5]), 0.0);
        assert!((belief_distance(&[0.0, 0.0], &[1.0, 1.0]) - 1.0).abs() < 1e-6);
        assert!((belief_distance(&[0.0], &[0.25]) - 0.25).abs() < 1e-6);
    }
}

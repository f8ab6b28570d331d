//! Simulation Systems
//!
//! Per-tick systems for movement, belief restoration, neighbor selection, and interaction.

pub mod movement;
pub mod restoration;
pub mod neighbors;
pub mod interaction;

// Re-export commonly used systems
pub use movement::{integrate_motion, sample_velocity};
pub use restoration::restore_beliefs;
pub use neighbors::{
    belief_distance, homophily_probability, neighbor_constants, Candidates, NeighborSampler,
};
pub use interaction::{baseline, interact, shifted_belief};

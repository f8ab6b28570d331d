//! Simulation Components
//!
//! Agent state and the population that owns it.

pub mod agent;
pub mod population;

pub use agent::*;
pub use population::*;

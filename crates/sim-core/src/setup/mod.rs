//! Population Setup
//!
//! Population initialization and agent spawning.

pub mod agents;

pub use agents::*;

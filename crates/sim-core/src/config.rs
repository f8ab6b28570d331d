//! Configuration System
//!
//! Loads run parameters from tuning.toml so runs can be tuned without recompiling.
//! Every field has a default, so a tuning file only needs the values it changes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// How surviving neighbor candidates are weighted when drawing partners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborWeighting {
    /// Every candidate is equally likely
    #[default]
    Uniform,
    /// Closer candidates are more likely
    Distance,
}

/// Parameters governing one simulation run.
///
/// Shared read-only by the engine and every agent for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of independent belief dimensions per agent
    pub belief_axis_count: usize,
    /// Chance per tick that an agent picks a new velocity
    pub change_velocity_probability: f32,
    /// How strongly the first two beliefs steer a new velocity
    pub belief_velocity_weight: f32,
    /// Scale applied to every new velocity
    pub velocity_multiplier: f32,
    /// Squared interaction radius before division by population size
    pub interaction_radius: f32,
    /// Homophily strength; 0 turns belief filtering off
    pub belief_filter: f32,
    /// Weight of the neutral midpoint in an agent's baseline (0..1)
    pub extreme_bias: f32,
    /// Fraction of the baseline gap closed per interaction
    pub interaction_effect: f32,
    /// Fraction of the gap to the value anchor closed per tick
    pub value_effect: f32,
    /// Partners drawn per agent per tick (with replacement)
    pub interactions_per_step: usize,
    /// Share of influence that is random; the rest is a fixed floor
    pub random_influence_share: f32,
    /// Seat agents by their first two beliefs instead of at random
    pub partisan_position: bool,
    /// Candidate weighting used by the neighbor sampler
    pub neighbor_weighting: NeighborWeighting,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            belief_axis_count: 2,
            change_velocity_probability: 0.1,
            belief_velocity_weight: 0.25,
            velocity_multiplier: 0.01,
            interaction_radius: 1.0,
            belief_filter: 0.5,
            extreme_bias: 0.1,
            interaction_effect: 0.01,
            value_effect: 0.01,
            interactions_per_step: 2,
            random_influence_share: 0.5,
            partisan_position: false,
            neighbor_weighting: NeighborWeighting::Uniform,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        content.parse()
    }

    /// Render this configuration as a TOML document
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", DEFAULT_TUNING_PATH, e);
            Self::default()
        })
    }

    /// Whether the features keyed on the first two belief axes apply
    pub fn has_belief_plane(&self) -> bool {
        self.belief_axis_count >= 2
    }

    /// Check every constraint the engine relies on.
    ///
    /// Called once at initialization; a config that passes never causes a
    /// fault during stepping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.belief_axis_count < 1 {
            return Err(ConfigError::NoBeliefAxes);
        }

        let floats = [
            ("change_velocity_probability", self.change_velocity_probability),
            ("belief_velocity_weight", self.belief_velocity_weight),
            ("velocity_multiplier", self.velocity_multiplier),
            ("interaction_radius", self.interaction_radius),
            ("belief_filter", self.belief_filter),
            ("extreme_bias", self.extreme_bias),
            ("interaction_effect", self.interaction_effect),
            ("value_effect", self.value_effect),
            ("random_influence_share", self.random_influence_share),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
        }

        // Influence must keep a positive floor: it is a divisor in the interaction rule
        if !(0.0..1.0).contains(&self.random_influence_share) {
            return Err(ConfigError::InfluenceShareOutOfRange(
                self.random_influence_share,
            ));
        }

        check_unit("change_velocity_probability", self.change_velocity_probability)?;
        check_unit("extreme_bias", self.extreme_bias)?;
        check_non_negative("velocity_multiplier", self.velocity_multiplier)?;
        check_non_negative("interaction_radius", self.interaction_radius)?;
        check_non_negative("belief_filter", self.belief_filter)?;

        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    /// Parse configuration from a TOML string
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

fn check_unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected: "[0, 1]",
        })
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected: ">= 0",
        })
    }
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("belief_axis_count must be at least 1")]
    NoBeliefAxes,
    #[error("random_influence_share {0} must be in [0, 1) so influence stays positive")]
    InfluenceShareOutOfRange(f32),
    #[error("{field} = {value} must be in {expected}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

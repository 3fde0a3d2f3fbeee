//! Error types for the physics core and its configuration layer

use crate::physics::math::Scalar;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SimulationError>;

#[derive(Debug, Error)]
pub enum SimulationError {
    /// Total mass of the system is zero, so no barycentric frame exists
    #[error("total mass of the body system is zero; cannot remove net momentum")]
    ZeroTotalMass,

    #[error("body {index} has invalid mass {mass} (must be finite and non-negative)")]
    InvalidMass { index: usize, mass: Scalar },

    #[error("body {index} has a non-finite position or velocity")]
    NonFiniteState { index: usize },

    #[error("orbital radius must be finite and positive, got {0}")]
    InvalidRadius(Scalar),

    #[error("invalid value {value} for constant `{name}`")]
    InvalidConstant { name: &'static str, value: Scalar },

    #[error("unknown integrator '{name}'; available integrators: {}", available.join(", "))]
    UnknownIntegrator {
        name: String,
        available: Vec<String>,
    },

    #[error("unknown preset '{0}'; expected one of: solar_system, two_body, random")]
    UnknownPreset(String),

    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

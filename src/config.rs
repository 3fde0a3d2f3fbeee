use crate::error::{Result, SimulationError};
use crate::physics::constants::{
    DEFAULT_SOFTENING, DEFAULT_TIME_STEP, GRAVITATIONAL_CONSTANT, SimulationConstants,
};
use crate::physics::math::Scalar;
use crate::presets::{self, BodyDescriptor, Preset, RandomSystemParameters};
use crate::rng::{RenderingRng, SharedRng};
use crate::trails::DEFAULT_TRAIL_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Prefix for environment overrides, e.g. `ORRERY__PHYSICS__TIME_STEP=0.001`
pub const ENV_PREFIX: &str = "ORRERY";

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub system: SystemConfig,
    pub trails: TrailConfig,
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravitational_constant: Scalar,
    pub time_step: Scalar,
    pub softening: Scalar,
    pub substeps_per_frame: usize,
    pub integrator: String,
    pub recenter_positions: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            time_step: DEFAULT_TIME_STEP,
            softening: DEFAULT_SOFTENING,
            substeps_per_frame: 5,
            integrator: "velocity_verlet".to_string(),
            recenter_positions: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SystemConfig {
    pub preset: Preset,
    pub seed: Option<u64>,
    pub random_body_count: usize,
    pub random_min_orbit_radius: Scalar,
    pub random_max_orbit_radius: Scalar,
    pub two_body_orbit_radius: Scalar,
    pub two_body_planet_mass: Scalar,
    /// Explicit bodies; when present they replace the preset
    pub bodies: Option<Vec<BodyDescriptor>>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        let random = RandomSystemParameters::default();
        Self {
            preset: Preset::SolarSystem,
            seed: None,
            random_body_count: random.body_count,
            random_min_orbit_radius: *random.orbit_radius.start(),
            random_max_orbit_radius: *random.orbit_radius.end(),
            two_body_orbit_radius: 1.0,
            two_body_planet_mass: 3.00e-6,
            bodies: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TrailConfig {
    pub enabled: bool,
    pub max_points: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_points: DEFAULT_TRAIL_CAPACITY,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub enabled: bool,
    pub sample_interval_frames: u64,
    pub max_history_length: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sample_interval_frames: 60,
            max_history_length: 120,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to parse config file {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path.display());
                Self::default()
            }
        }
    }

    /// Layer defaults, then the file at `path` if it exists, then
    /// `ORRERY__`-prefixed environment variables.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let layered = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(layered.try_deserialize()?)
    }

    /// Platform-specific location of the user's configuration file
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "orrery")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the user's configuration directory, or defaults when there is none
    pub fn load_from_user_config() -> Self {
        match Self::user_config_path() {
            Some(path) => Self::load_or_default(path),
            None => {
                warn!("Could not determine a configuration directory. Using defaults.");
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn constants(&self) -> Result<SimulationConstants> {
        SimulationConstants::new(
            self.physics.gravitational_constant,
            self.physics.time_step,
            self.physics.softening,
        )
    }

    /// Checks the physics settings without building any bodies
    pub fn validate(&self) -> Result<()> {
        self.constants()?;
        if self.physics.substeps_per_frame == 0 {
            return Err(SimulationError::InvalidConstant {
                name: "substeps_per_frame",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// The bodies to simulate: the explicit list if one is configured,
    /// otherwise the configured preset.
    pub fn descriptors(&self) -> Result<Vec<BodyDescriptor>> {
        if let Some(bodies) = &self.system.bodies {
            return Ok(bodies.clone());
        }

        let descriptors = match self.system.preset {
            Preset::SolarSystem => presets::solar_system(),
            Preset::TwoBody => presets::two_body(
                self.system.two_body_orbit_radius,
                self.system.two_body_planet_mass,
            ),
            Preset::Random => {
                let (min, max) = (
                    self.system.random_min_orbit_radius,
                    self.system.random_max_orbit_radius,
                );
                if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
                    return Err(SimulationError::InvalidRadius(min));
                }
                let parameters = RandomSystemParameters {
                    body_count: self.system.random_body_count,
                    orbit_radius: min..=max,
                    ..RandomSystemParameters::default()
                };
                presets::random_system(
                    &parameters,
                    &mut SharedRng::from_optional_seed(self.system.seed),
                    &mut RenderingRng::from_optional_seed(self.system.seed),
                )
            }
        };

        Ok(descriptors)
    }
}

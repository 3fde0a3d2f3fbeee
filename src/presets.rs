//! Initial-condition scenarios
//!
//! A preset is a list of [`BodyDescriptor`]s. Descriptors with an orbit
//! radius become bodies on circular orbits around the origin; descriptors
//! without one become bodies resting at the origin, which is how the
//! dominant central mass is described.

use crate::appearance::{Appearance, Color, random_rainbow_color};
use crate::error::{Result, SimulationError};
use crate::physics::body::Body;
use crate::physics::constants::SimulationConstants;
use crate::physics::math::{Scalar, TAU};
use crate::physics::orbits;
use crate::rng::{RenderingRng, SharedRng};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Configuration-level description of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub name: String,
    /// Mass in solar masses
    pub mass: Scalar,
    /// Circular orbit radius in AU; `None` places the body at rest at the origin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit_radius: Option<Scalar>,
    /// Starting angle around the z axis in radians
    #[serde(default)]
    pub phase: Scalar,
    #[serde(default)]
    pub appearance: Appearance,
}

impl BodyDescriptor {
    pub fn central(name: impl Into<String>, mass: Scalar, appearance: Appearance) -> Self {
        Self {
            name: name.into(),
            mass,
            orbit_radius: None,
            phase: 0.0,
            appearance,
        }
    }

    pub fn orbiting(
        name: impl Into<String>,
        mass: Scalar,
        orbit_radius: Scalar,
        appearance: Appearance,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            orbit_radius: Some(orbit_radius),
            phase: 0.0,
            appearance,
        }
    }

    pub fn with_phase(mut self, phase: Scalar) -> Self {
        self.phase = phase;
        self
    }

    /// Turn the descriptor into a body in simulation units
    pub fn to_body(&self, constants: &SimulationConstants) -> Result<Body> {
        match self.orbit_radius {
            Some(radius) if self.phase == 0.0 => {
                orbits::circular_orbit(self.mass, radius, constants)
            }
            Some(radius) => {
                orbits::circular_orbit_at_phase(self.mass, radius, self.phase, constants)
            }
            None => Ok(Body::stationary(self.mass)),
        }
    }
}

/// Build bodies for every descriptor, keeping their order
pub fn build_bodies(
    descriptors: &[BodyDescriptor],
    constants: &SimulationConstants,
) -> Result<Vec<Body>> {
    descriptors
        .iter()
        .enumerate()
        .map(|(index, descriptor)| {
            descriptor.to_body(constants).map_err(|error| match error {
                SimulationError::InvalidMass { mass, .. } => {
                    SimulationError::InvalidMass { index, mass }
                }
                other => other,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    SolarSystem,
    TwoBody,
    Random,
}

impl FromStr for Preset {
    type Err = SimulationError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "solar_system" | "solar" => Ok(Preset::SolarSystem),
            "two_body" => Ok(Preset::TwoBody),
            "random" => Ok(Preset::Random),
            _ => Err(SimulationError::UnknownPreset(name.to_string())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::SolarSystem => write!(f, "solar_system"),
            Preset::TwoBody => write!(f, "two_body"),
            Preset::Random => write!(f, "random"),
        }
    }
}

/// The Sun and the eight planets, masses in solar masses and orbit radii
/// in AU, all starting in a line along the x axis.
pub fn solar_system() -> Vec<BodyDescriptor> {
    let planet = |name: &str, mass: Scalar, radius: Scalar, color: Color, size: f32| {
        BodyDescriptor::orbiting(name, mass, radius, Appearance::new(color, size))
    };

    vec![
        BodyDescriptor::central("Sun", 1.0, Appearance::new(Color::YELLOW, 4.0)),
        planet("Mercury", 1.66e-7, 0.39, Color::rgb(200, 200, 200), 1.0),
        planet("Venus", 2.45e-6, 0.72, Color::rgb(255, 180, 120), 1.5),
        planet("Earth", 3.00e-6, 1.00, Color::BLUE, 2.0),
        planet("Mars", 3.23e-7, 1.52, Color::RED, 1.5),
        planet("Jupiter", 9.54e-4, 5.20, Color::rgb(210, 170, 120), 3.0),
        planet("Saturn", 2.86e-4, 9.58, Color::rgb(220, 200, 150), 2.5),
        planet("Uranus", 4.36e-5, 19.2, Color::CYAN, 2.0),
        planet("Neptune", 5.15e-5, 30.1, Color::rgb(120, 120, 255), 2.0),
    ]
}

/// A unit central mass and one planet on a circular orbit
pub fn two_body(orbit_radius: Scalar, planet_mass: Scalar) -> Vec<BodyDescriptor> {
    vec![
        BodyDescriptor::central("Sun", 1.0, Appearance::new(Color::YELLOW, 4.0)),
        BodyDescriptor::orbiting(
            "Planet",
            planet_mass,
            orbit_radius,
            Appearance::new(Color::BLUE, 2.0),
        ),
    ]
}

/// Parameters for a randomly generated planetary system
#[derive(Debug, Clone, PartialEq)]
pub struct RandomSystemParameters {
    pub body_count: usize,
    pub orbit_radius: RangeInclusive<Scalar>,
    pub planet_mass: RangeInclusive<Scalar>,
}

impl Default for RandomSystemParameters {
    fn default() -> Self {
        Self {
            body_count: 8,
            orbit_radius: 0.3..=30.0,
            planet_mass: 1e-7..=1e-3,
        }
    }
}

/// A unit central mass plus `body_count` planets at random radii and phases.
///
/// Physical parameters come from `physics_rng` and colors from
/// `rendering_rng`, so the same physics seed always yields the same orbits
/// regardless of how colors are drawn.
pub fn random_system(
    parameters: &RandomSystemParameters,
    physics_rng: &mut SharedRng,
    rendering_rng: &mut RenderingRng,
) -> Vec<BodyDescriptor> {
    let mut descriptors = Vec::with_capacity(parameters.body_count + 1);
    descriptors.push(BodyDescriptor::central(
        "Sun",
        1.0,
        Appearance::new(Color::YELLOW, 4.0),
    ));

    for index in 0..parameters.body_count {
        let radius = physics_rng.random_range(parameters.orbit_radius.clone());
        let mass = physics_rng.random_range(parameters.planet_mass.clone());
        let phase = physics_rng.random_range(0.0..TAU);
        let appearance = Appearance::new(random_rainbow_color(rendering_rng), 2.0);

        descriptors.push(
            BodyDescriptor::orbiting(format!("Planet {}", index + 1), mass, radius, appearance)
                .with_phase(phase),
        );
    }

    descriptors
}

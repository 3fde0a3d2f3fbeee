//! Initial conditions for bodies on circular orbits

use crate::error::{Result, SimulationError};
use crate::physics::body::Body;
use crate::physics::constants::SimulationConstants;
use crate::physics::math::{self, Scalar, TAU, Vector};

fn validate_radius(radius: Scalar) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(SimulationError::InvalidRadius(radius));
    }
    Ok(())
}

/// Speed of a circular orbit of the given radius around a unit central mass
/// at the origin: v = sqrt(G / r).
pub fn circular_speed(radius: Scalar, gravitational_constant: Scalar) -> Result<Scalar> {
    validate_radius(radius)?;
    Ok(math::sqrt(gravitational_constant / radius))
}

/// Orbital period from Kepler's third law for a unit central mass:
/// T = 2π · sqrt(r³ / G).
pub fn orbital_period(radius: Scalar, gravitational_constant: Scalar) -> Result<Scalar> {
    validate_radius(radius)?;
    Ok(TAU * math::sqrt(radius * radius * radius / gravitational_constant))
}

/// Build a body on a prograde circular orbit in the XY plane, starting on
/// the positive x axis.
///
/// The derivation ignores every mass but the unit central body, so it is
/// only accurate when the central body dominates. Once the simulation runs,
/// the force model still includes every pairwise interaction.
pub fn circular_orbit(
    mass: Scalar,
    radius: Scalar,
    constants: &SimulationConstants,
) -> Result<Body> {
    if !mass.is_finite() || mass < 0.0 {
        return Err(SimulationError::InvalidMass { index: 0, mass });
    }

    let speed = circular_speed(radius, constants.gravitational_constant)?;

    Ok(Body::new(
        mass,
        Vector::new(radius, 0.0, 0.0),
        Vector::new(0.0, speed, 0.0),
    ))
}

/// Like [`circular_orbit`], but starting at `phase` radians around the
/// z axis instead of on the x axis.
pub fn circular_orbit_at_phase(
    mass: Scalar,
    radius: Scalar,
    phase: Scalar,
    constants: &SimulationConstants,
) -> Result<Body> {
    let mut body = circular_orbit(mass, radius, constants)?;
    let rotation = glam::DQuat::from_rotation_z(phase);
    body.position = rotation * body.position;
    body.velocity = rotation * body.velocity;
    Ok(body)
}

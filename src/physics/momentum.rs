//! Barycentric frame corrections
//!
//! With one body far heavier than the rest, any residual net momentum shows
//! up as the whole system sliding away over time. Removing it once at setup
//! keeps the barycenter fixed for the rest of the run.

use crate::error::{Result, SimulationError};
use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector};

pub fn total_mass(bodies: &[Body]) -> Scalar {
    bodies.iter().map(|body| body.mass).sum()
}

pub fn total_momentum(bodies: &[Body]) -> Vector {
    bodies
        .iter()
        .fold(Vector::ZERO, |momentum, body| momentum + body.momentum())
}

/// Mass-weighted mean position, or `None` for a massless system
pub fn barycenter(bodies: &[Body]) -> Option<Vector> {
    let (weighted_positions, total_mass): (Vector, Scalar) = bodies
        .iter()
        .fold((Vector::ZERO, 0.0), |(position_sum, mass_sum), body| {
            (position_sum + body.position * body.mass, mass_sum + body.mass)
        });

    if total_mass == 0.0 {
        return None;
    }

    Some(weighted_positions / total_mass)
}

/// Remove net linear momentum by subtracting the barycentric velocity from
/// every body.
///
/// Returns the correction velocity that was subtracted. Fails without
/// touching any body when the total mass is zero.
pub fn enforce_barycenter(bodies: &mut [Body]) -> Result<Vector> {
    let mass = total_mass(bodies);
    if mass == 0.0 {
        return Err(SimulationError::ZeroTotalMass);
    }

    let correction = total_momentum(bodies) / mass;

    for body in bodies.iter_mut() {
        body.velocity -= correction;
    }

    Ok(correction)
}

/// Shift every position so the barycenter sits on the origin.
///
/// Returns the offset that was removed. Relative positions, and therefore
/// accelerations, are unchanged.
pub fn recenter_on_barycenter(bodies: &mut [Body]) -> Result<Vector> {
    let offset = barycenter(bodies).ok_or(SimulationError::ZeroTotalMass)?;

    for body in bodies.iter_mut() {
        body.position -= offset;
    }

    Ok(offset)
}

//! Point-mass bodies

use crate::physics::math::{Scalar, Vector};

/// A gravitating point mass.
///
/// `acceleration` always reflects the positions of the whole system at the
/// moment it was last evaluated; `previous_acceleration` holds the value the
/// integrator snapshotted at the start of the most recent step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Mass in solar masses
    pub mass: Scalar,
    /// Position in AU
    pub position: Vector,
    /// Velocity in AU/yr
    pub velocity: Vector,
    /// Acceleration in AU/yr²
    pub acceleration: Vector,
    pub previous_acceleration: Vector,
}

impl Body {
    pub fn new(mass: Scalar, position: Vector, velocity: Vector) -> Self {
        Self {
            mass,
            position,
            velocity,
            acceleration: Vector::ZERO,
            previous_acceleration: Vector::ZERO,
        }
    }

    /// A body resting at the origin, used for the dominant central mass
    pub fn stationary(mass: Scalar) -> Self {
        Self::new(mass, Vector::ZERO, Vector::ZERO)
    }

    #[inline]
    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }

    #[inline]
    pub fn kinetic_energy(&self) -> Scalar {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Angular momentum about the origin (m · r × v)
    #[inline]
    pub fn angular_momentum(&self) -> Vector {
        self.position.cross(self.velocity) * self.mass
    }

    /// Angular momentum per unit mass (r × v)
    #[inline]
    pub fn specific_angular_momentum(&self) -> Vector {
        self.position.cross(self.velocity)
    }

    pub fn distance_to(&self, other: &Body) -> Scalar {
        (self.position - other.position).length()
    }

    pub fn orbital_radius(&self) -> Scalar {
        self.position.length()
    }
}

//! Gravitational acceleration field for the whole body system

use crate::physics::body::Body;
use crate::physics::constants::SimulationConstants;
use crate::physics::math::{Scalar, Vector};

/// Anything that can turn the current positions of a body system into
/// per-body accelerations.
///
/// Implementations overwrite `acceleration` on every body and must leave
/// `position`, `velocity` and `previous_acceleration` untouched.
pub trait ForceModel: Send + Sync {
    fn compute_accelerations(&self, bodies: &mut [Body]);
}

/// Direct pairwise Newtonian gravity, O(n²) in the number of bodies.
///
/// Each unordered pair is visited once and the result applied to both bodies
/// with opposite sign. The softening length is added to the separation
/// before cubing, so the peak acceleration during a close encounter is
/// capped at roughly `G · m / ε²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairwiseGravity {
    pub gravitational_constant: Scalar,
    pub softening: Scalar,
}

impl PairwiseGravity {
    pub fn new(gravitational_constant: Scalar, softening: Scalar) -> Self {
        Self {
            gravitational_constant,
            softening,
        }
    }

    /// Force per unit mass that body `j` exerts on body `i`, before the
    /// mass of `j` is applied.
    #[inline]
    pub fn pair_field(&self, position_i: Vector, position_j: Vector) -> Vector {
        let r = position_j - position_i;
        let distance = r.length() + self.softening;
        let inverse_distance_cubed = 1.0 / (distance * distance * distance);

        r * (self.gravitational_constant * inverse_distance_cubed)
    }

    /// Potential energy of a single pair, using the same softened distance
    /// as the force law.
    #[inline]
    pub fn pair_potential(&self, a: &Body, b: &Body) -> Scalar {
        let distance = (b.position - a.position).length() + self.softening;
        -self.gravitational_constant * a.mass * b.mass / distance
    }

    /// Total gravitational potential energy of the system
    pub fn potential_energy(&self, bodies: &[Body]) -> Scalar {
        let mut energy = 0.0;
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                energy += self.pair_potential(&bodies[i], &bodies[j]);
            }
        }
        energy
    }
}

impl From<&SimulationConstants> for PairwiseGravity {
    fn from(constants: &SimulationConstants) -> Self {
        Self::new(constants.gravitational_constant, constants.softening)
    }
}

impl ForceModel for PairwiseGravity {
    fn compute_accelerations(&self, bodies: &mut [Body]) {
        for body in bodies.iter_mut() {
            body.acceleration = Vector::ZERO;
        }

        let count = bodies.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let field = self.pair_field(bodies[i].position, bodies[j].position);
                let mass_i = bodies[i].mass;
                let mass_j = bodies[j].mass;

                bodies[i].acceleration += field * mass_j;
                bodies[j].acceleration -= field * mass_i;
            }
        }
    }
}

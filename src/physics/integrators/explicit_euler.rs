//! Explicit Euler integration method (forward Euler)
//!
//! Provided for comparison only. It does not preserve phase-space volume, so
//! orbit energies drift monotonically and circular orbits spiral outward.

use super::Integrator;
use crate::physics::body::Body;
use crate::physics::forces::ForceModel;
use crate::physics::math::Scalar;

/// Explicit Euler integrator (forward Euler method)
///
/// Position is updated with the old velocity, velocity with the old
/// acceleration:
///
/// ```text
/// x(t+dt) = x(t) + v(t) * dt
/// v(t+dt) = v(t) + a(t) * dt
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn step(&self, bodies: &mut [Body], forces: &dyn ForceModel, dt: Scalar) {
        for body in bodies.iter_mut() {
            body.previous_acceleration = body.acceleration;
            body.position += body.velocity * dt;
            body.velocity += body.acceleration * dt;
        }

        forces.compute_accelerations(bodies);
    }

    fn convergence_order(&self) -> usize {
        1
    }

    fn is_symplectic(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "explicit_euler"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["euler", "forward_euler"]
    }
}

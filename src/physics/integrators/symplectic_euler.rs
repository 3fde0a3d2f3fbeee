//! Symplectic Euler integration method
//!
//! The simplest symplectic integrator. First-order accurate, but its energy
//! error stays bounded, which makes it a useful baseline next to velocity
//! Verlet.

use super::Integrator;
use crate::physics::body::Body;
use crate::physics::forces::ForceModel;
use crate::physics::math::Scalar;

/// Symplectic Euler integrator (also known as semi-implicit Euler)
///
/// Velocity is updated before position:
///
/// ```text
/// v(t+dt) = v(t) + a(t) * dt
/// x(t+dt) = x(t) + v(t+dt) * dt
/// ```
///
/// Swapping the two updates gives explicit Euler, which is not symplectic.
#[derive(Debug, Copy, Clone, Default)]
pub struct SymplecticEuler;

impl Integrator for SymplecticEuler {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn step(&self, bodies: &mut [Body], forces: &dyn ForceModel, dt: Scalar) {
        for body in bodies.iter_mut() {
            body.previous_acceleration = body.acceleration;
            body.velocity += body.acceleration * dt;
            body.position += body.velocity * dt;
        }

        forces.compute_accelerations(bodies);
    }

    fn convergence_order(&self) -> usize {
        1
    }

    fn is_symplectic(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "symplectic_euler"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["semi_implicit_euler", "euler_cromer"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::math::Vector;

    struct UniformField(Vector);

    impl ForceModel for UniformField {
        fn compute_accelerations(&self, bodies: &mut [Body]) {
            for body in bodies.iter_mut() {
                body.acceleration = self.0;
            }
        }
    }

    #[test]
    fn test_velocity_updated_before_position() {
        let field = UniformField(Vector::new(0.0, -10.0, 0.0));
        let mut bodies = vec![Body::new(1.0, Vector::ZERO, Vector::X)];
        field.compute_accelerations(&mut bodies);

        SymplecticEuler.step(&mut bodies, &field, 0.1);

        assert!((bodies[0].velocity.y - -1.0).abs() < 1e-12);
        // Position uses the new velocity
        assert!((bodies[0].position.y - -0.1).abs() < 1e-12);
        assert!((bodies[0].position.x - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_properties() {
        let integrator = SymplecticEuler;
        assert_eq!(integrator.name(), "symplectic_euler");
        assert_eq!(integrator.convergence_order(), 1);
        assert!(integrator.is_symplectic());
    }
}

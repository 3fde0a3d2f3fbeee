//! Velocity Verlet integration method

use super::Integrator;
use crate::physics::body::Body;
use crate::physics::forces::ForceModel;
use crate::physics::math::Scalar;

/// Velocity Verlet integrator
///
/// A second-order symplectic integrator that provides excellent energy
/// conservation for gravitational n-body systems. Orbits neither spiral in nor
/// out: the energy error oscillates within a bounded band instead of drifting.
///
/// The algorithm, for every body:
/// 1. Snapshot a(t) into `previous_acceleration`
/// 2. Update position: x(t+dt) = x(t) + v(t)*dt + 0.5*a(t)*dt²
/// 3. Recompute a(t+dt) from the new positions (one force evaluation)
/// 4. Update velocity: v(t+dt) = v(t) + 0.5*(a(t) + a(t+dt))*dt
///
/// The snapshot lives on each body, so the integrator itself holds no state.
#[derive(Debug, Copy, Clone, Default)]
pub struct VelocityVerlet;

impl Integrator for VelocityVerlet {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn step(&self, bodies: &mut [Body], forces: &dyn ForceModel, dt: Scalar) {
        let half_dt_squared = 0.5 * dt * dt;

        for body in bodies.iter_mut() {
            body.previous_acceleration = body.acceleration;
            body.position += body.velocity * dt + body.acceleration * half_dt_squared;
        }

        forces.compute_accelerations(bodies);

        let half_dt = 0.5 * dt;
        for body in bodies.iter_mut() {
            body.velocity += (body.previous_acceleration + body.acceleration) * half_dt;
        }
    }

    fn convergence_order(&self) -> usize {
        2
    }

    fn is_symplectic(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "velocity_verlet"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["verlet", "vv"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::math::Vector;

    /// Uniform field that ignores positions, like a planet's surface gravity
    struct UniformField(Vector);

    impl ForceModel for UniformField {
        fn compute_accelerations(&self, bodies: &mut [Body]) {
            for body in bodies.iter_mut() {
                body.acceleration = self.0;
            }
        }
    }

    /// Spring pulling every body toward the origin (a = -k x)
    struct Spring(Scalar);

    impl ForceModel for Spring {
        fn compute_accelerations(&self, bodies: &mut [Body]) {
            for body in bodies.iter_mut() {
                body.acceleration = body.position * -self.0;
            }
        }
    }

    #[test]
    fn test_velocity_verlet_uniform_field_step() {
        let field = UniformField(Vector::new(0.0, 0.0, -9.81));
        let mut bodies = vec![Body::new(
            1.0,
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
        )];
        field.compute_accelerations(&mut bodies);
        let dt = 0.01;

        VelocityVerlet.step(&mut bodies, &field, dt);

        let body = &bodies[0];
        assert!((body.position.x - 1.0).abs() < 1e-12);
        assert!((body.position.y - 0.01).abs() < 1e-12);
        assert!((body.position.z - -0.00049).abs() < 1e-6);
        assert!((body.velocity.z - -0.0981).abs() < 1e-12);
        assert_eq!(body.previous_acceleration, Vector::new(0.0, 0.0, -9.81));
    }

    #[test]
    fn test_velocity_uses_average_of_old_and_new_acceleration() {
        let spring = Spring(4.0);
        let mut bodies = vec![Body::new(1.0, Vector::new(1.0, 0.0, 0.0), Vector::ZERO)];
        spring.compute_accelerations(&mut bodies);
        let dt = 0.1;

        VelocityVerlet.step(&mut bodies, &spring, dt);

        // x1 = 1 + 0.5 * (-4) * 0.01 = 0.98, a1 = -3.92
        let body = &bodies[0];
        assert!((body.position.x - 0.98).abs() < 1e-12);
        assert!((body.acceleration.x - -3.92).abs() < 1e-12);
        // v1 = 0.5 * (-4 - 3.92) * 0.1 = -0.396
        assert!((body.velocity.x - -0.396).abs() < 1e-12);
    }

    #[test]
    fn test_energy_conservation() {
        let k = 1.0;
        let spring = Spring(k);
        let mut bodies = vec![Body::new(1.0, Vector::new(1.0, 0.0, 0.0), Vector::ZERO)];
        spring.compute_accelerations(&mut bodies);
        let dt = 0.01;

        let energy = |body: &Body| {
            0.5 * body.velocity.length_squared() + 0.5 * k * body.position.length_squared()
        };
        let initial_energy = energy(&bodies[0]);

        let mut max_energy_error: Scalar = 0.0;
        for _ in 0..10_000 {
            VelocityVerlet.step(&mut bodies, &spring, dt);
            let error = ((energy(&bodies[0]) - initial_energy) / initial_energy).abs();
            max_energy_error = max_energy_error.max(error);
        }

        assert!(max_energy_error < 1e-4, "Energy error: {max_energy_error}");
    }

    #[test]
    fn test_properties() {
        let integrator = VelocityVerlet;
        assert_eq!(integrator.name(), "velocity_verlet");
        assert_eq!(integrator.convergence_order(), 2);
        assert!(integrator.is_symplectic());
        assert!(integrator.aliases().contains(&"verlet"));
    }
}

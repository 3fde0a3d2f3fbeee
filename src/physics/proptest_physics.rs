//! Property-based tests for the physics core using proptest.
//!
//! These check physical invariants across randomly generated systems rather
//! than hand-picked configurations.

use proptest::prelude::*;

use crate::physics::body::Body;
use crate::physics::constants::SimulationConstants;
use crate::physics::forces::{ForceModel, PairwiseGravity};
use crate::physics::math::Vector;
use crate::physics::momentum;
use crate::physics::system::BodySystem;

fn vector(range: f64) -> impl Strategy<Value = Vector> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| Vector::new(x, y, z))
}

fn body() -> impl Strategy<Value = Body> {
    (1e-7f64..10.0, vector(50.0), vector(10.0))
        .prop_map(|(mass, position, velocity)| Body::new(mass, position, velocity))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Newton's third law: a pair's contributions cancel once weighted by mass.
    #[test]
    fn prop_pair_forces_cancel(a in body(), b in body()) {
        prop_assume!(a.distance_to(&b) > 1e-3);

        let mut bodies = vec![a, b];
        PairwiseGravity::from(&SimulationConstants::default()).compute_accelerations(&mut bodies);

        let force_a = bodies[0].acceleration * bodies[0].mass;
        let force_b = bodies[1].acceleration * bodies[1].mass;
        let scale = force_a.length().max(force_b.length());

        prop_assert!(
            (force_a + force_b).length() <= 1e-12 * scale,
            "Forces do not cancel: {:?} vs {:?}", force_a, force_b
        );
    }

    /// The mass-weighted sum of all accelerations vanishes for any system.
    #[test]
    fn prop_net_internal_force_is_zero(bodies in prop::collection::vec(body(), 2..8)) {
        let mut bodies = bodies;
        let gravity = PairwiseGravity::from(&SimulationConstants::default());
        gravity.compute_accelerations(&mut bodies);

        let net = bodies
            .iter()
            .fold(Vector::ZERO, |total, body| total + body.acceleration * body.mass);

        // Individual pair forces bound the rounding error, even when a
        // body's net acceleration nearly cancels.
        let mut scale: f64 = 0.0;
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let field = gravity.pair_field(bodies[i].position, bodies[j].position);
                scale += field.length() * bodies[i].mass * bodies[j].mass;
            }
        }

        prop_assert!(net.length() <= 1e-10 * scale.max(1e-300));
    }

    /// After removing net momentum, what remains is floating-point noise.
    #[test]
    fn prop_barycenter_zeroes_momentum(bodies in prop::collection::vec(body(), 1..10)) {
        let mut bodies = bodies;
        let scale: f64 = bodies.iter().map(|body| body.momentum().length()).sum();

        momentum::enforce_barycenter(&mut bodies).unwrap();

        prop_assert!(momentum::total_momentum(&bodies).length() <= 1e-12 * scale.max(1.0));
    }

    /// A lone body never accelerates and never moves when initially at rest.
    #[test]
    fn prop_single_body_stationary(
        mass in 1e-7f64..10.0,
        position in vector(50.0),
        steps in 1usize..200,
    ) {
        let mut system = BodySystem::initialize(
            vec![Body::new(mass, position, Vector::ZERO)],
            SimulationConstants::default(),
        ).unwrap();

        for _ in 0..steps {
            system.step();
        }

        let body = system.body(0).unwrap();
        prop_assert_eq!(body.acceleration, Vector::ZERO);
        prop_assert_eq!(body.position, position);
    }

    /// Stepping never alters the number of bodies or their masses.
    #[test]
    fn prop_mass_and_count_fixed(bodies in prop::collection::vec(body(), 2..6)) {
        let masses: Vec<f64> = bodies.iter().map(|body| body.mass).collect();
        let mut system = BodySystem::initialize(bodies, SimulationConstants::default()).unwrap();

        for _ in 0..20 {
            system.step();
        }

        prop_assert_eq!(system.len(), masses.len());
        let after: Vec<f64> = system.bodies().iter().map(|body| body.mass).collect();
        prop_assert_eq!(after, masses);
    }
}

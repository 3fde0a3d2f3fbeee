//! Fixtures shared by unit tests, integration tests and benchmarks

use crate::physics::body::Body;
use crate::physics::constants::SimulationConstants;
use crate::physics::integrators::Integrator;
use crate::physics::math::{Scalar, Vector, relative_change};
use crate::physics::system::BodySystem;
use crate::presets;

/// Earth-mass planet on a 1 AU circular orbit around a unit mass, initialized
pub fn two_body_system() -> BodySystem {
    circular_two_body(1.0, 3.00e-6, SimulationConstants::default())
}

/// Unit central mass with a planet on a circular orbit, initialized
pub fn circular_two_body(
    radius: Scalar,
    planet_mass: Scalar,
    constants: SimulationConstants,
) -> BodySystem {
    let bodies = presets::build_bodies(&presets::two_body(radius, planet_mass), &constants)
        .expect("valid two-body fixture");
    BodySystem::initialize(bodies, constants).expect("two-body fixture has mass")
}

/// The Sun and eight planets, initialized
pub fn solar_system() -> BodySystem {
    let constants = SimulationConstants::default();
    let bodies = presets::build_bodies(&presets::solar_system(), &constants)
        .expect("valid solar system fixture");
    BodySystem::initialize(bodies, constants).expect("solar system fixture has mass")
}

/// `count` equal-mass bodies on a jittered cubic lattice, for scaling tests
pub fn lattice_system(count: usize) -> BodySystem {
    let side = (count as f64).cbrt().ceil() as usize;
    let bodies = (0..count)
        .map(|index| {
            let (x, y, z) = (index % side, (index / side) % side, index / (side * side));
            let jitter = 0.01 * (index as Scalar).sin();
            Body::new(
                1.0 / count as Scalar,
                Vector::new(x as Scalar + jitter, y as Scalar, z as Scalar - jitter),
                Vector::new(-(y as Scalar), x as Scalar, 0.0) * 0.1,
            )
        })
        .collect();

    BodySystem::initialize(bodies, SimulationConstants::default())
        .expect("lattice fixture has mass")
}

/// Step `system` until at least `duration` simulated years have passed
pub fn run_for(system: &mut BodySystem, integrator: &dyn Integrator, duration: Scalar) {
    let steps = (duration / system.constants().time_step).ceil() as usize;
    system.step_n(integrator, steps);
}

/// Relative total-energy error against `initial_energy`
pub fn relative_energy_error(initial_energy: Scalar, system: &BodySystem) -> Scalar {
    relative_change(initial_energy, system.total_energy())
}

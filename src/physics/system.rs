//! The owned collection of gravitating bodies
//!
//! A [`BodySystem`] is created once, with a fixed set of bodies, and then only
//! ever advanced in time. The index of a body in the system is its identity
//! for the rest of the run, so callers can key rendering state on it.

use crate::error::{Result, SimulationError};
use crate::physics::body::Body;
use crate::physics::constants::SimulationConstants;
use crate::physics::forces::{ForceModel, PairwiseGravity};
use crate::physics::integrators::{Integrator, VelocityVerlet};
use crate::physics::math::{Scalar, Vector};
use crate::physics::momentum;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct BodySystem {
    bodies: Vec<Body>,
    constants: SimulationConstants,
    forces: PairwiseGravity,
    time: Scalar,
    step_count: u64,
}

impl BodySystem {
    /// Validate bodies and constants without touching their state.
    ///
    /// Accelerations are left as given; call [`BodySystem::compute_accelerations`]
    /// before the first step, or use [`BodySystem::initialize`].
    pub fn new(bodies: Vec<Body>, constants: SimulationConstants) -> Result<Self> {
        constants.validate()?;

        for (index, body) in bodies.iter().enumerate() {
            if !body.mass.is_finite() || body.mass < 0.0 {
                return Err(SimulationError::InvalidMass {
                    index,
                    mass: body.mass,
                });
            }

            if !body.position.is_finite() || !body.velocity.is_finite() {
                return Err(SimulationError::NonFiniteState { index });
            }
        }

        Ok(Self {
            bodies,
            forces: PairwiseGravity::from(&constants),
            constants,
            time: 0.0,
            step_count: 0,
        })
    }

    /// Build a system ready to step: validate, evaluate the force model
    /// once, then remove net momentum.
    ///
    /// Fails with [`SimulationError::ZeroTotalMass`] when there is no mass
    /// to anchor a barycentric frame.
    pub fn initialize(bodies: Vec<Body>, constants: SimulationConstants) -> Result<Self> {
        let mut system = Self::new(bodies, constants)?;
        system.compute_accelerations();
        let correction = system.enforce_barycenter()?;

        debug!(
            bodies = system.len(),
            total_mass = system.total_mass(),
            correction = ?correction,
            "Initialized body system"
        );

        Ok(system)
    }

    /// Re-evaluate every body's acceleration for the current positions
    pub fn compute_accelerations(&mut self) {
        self.forces.compute_accelerations(&mut self.bodies);
    }

    /// Subtract the barycentric velocity from every body
    pub fn enforce_barycenter(&mut self) -> Result<Vector> {
        momentum::enforce_barycenter(&mut self.bodies)
    }

    /// Move the barycenter to the origin without changing relative positions
    pub fn recenter_on_barycenter(&mut self) -> Result<Vector> {
        momentum::recenter_on_barycenter(&mut self.bodies)
    }

    /// Advance by one step of `dt` using velocity Verlet
    pub fn step(&mut self) {
        self.step_with(&VelocityVerlet);
    }

    /// Advance by one step of `dt` using the given integrator
    pub fn step_with(&mut self, integrator: &dyn Integrator) {
        integrator.step(&mut self.bodies, &self.forces, self.constants.time_step);
        self.time += self.constants.time_step;
        self.step_count += 1;

        trace!(step = self.step_count, time = self.time, "Advanced body system");
    }

    /// Advance by `count` steps and return the new simulated time
    pub fn step_n(&mut self, integrator: &dyn Integrator, count: usize) -> Scalar {
        for _ in 0..count {
            self.step_with(integrator);
        }
        self.time
    }

    /// Snapshot of every body's position, keyed by index
    pub fn positions(&self) -> impl Iterator<Item = (usize, Vector)> + '_ {
        self.bodies
            .iter()
            .enumerate()
            .map(|(index, body)| (index, body.position))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn constants(&self) -> &SimulationConstants {
        &self.constants
    }

    /// Simulated time in years since construction
    pub fn time(&self) -> Scalar {
        self.time
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn total_mass(&self) -> Scalar {
        momentum::total_mass(&self.bodies)
    }

    pub fn total_momentum(&self) -> Vector {
        momentum::total_momentum(&self.bodies)
    }

    pub fn barycenter(&self) -> Option<Vector> {
        momentum::barycenter(&self.bodies)
    }

    pub fn kinetic_energy(&self) -> Scalar {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn potential_energy(&self) -> Scalar {
        self.forces.potential_energy(&self.bodies)
    }

    pub fn total_energy(&self) -> Scalar {
        self.kinetic_energy() + self.potential_energy()
    }

    /// Total angular momentum about the origin
    pub fn angular_momentum(&self) -> Vector {
        self.bodies
            .iter()
            .fold(Vector::ZERO, |total, body| total + body.angular_momentum())
    }
}

//! Gravitational n-body physics core
//!
//! Bodies live in a [`system::BodySystem`]; [`forces::PairwiseGravity`]
//! turns positions into accelerations and an [`integrators::Integrator`]
//! (velocity Verlet by default) advances the system one fixed step at a time.

pub mod body;
pub mod constants;
pub mod forces;
pub mod integrators;
pub mod math;
pub mod momentum;
pub mod orbits;
pub mod system;

#[cfg(test)]
mod proptest_physics;

pub use body::Body;
pub use constants::SimulationConstants;
pub use forces::{ForceModel, PairwiseGravity};
pub use integrators::{Integrator, IntegratorRegistry, VelocityVerlet};
pub use system::BodySystem;

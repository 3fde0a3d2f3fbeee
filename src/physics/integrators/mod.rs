//! Numerical integration methods for the n-body system
//!
//! Every integrator advances the whole system by one fixed step and calls the
//! force model exactly once per step. On return, each body's `acceleration`
//! reflects the new positions, so the next step can start from it without a
//! fresh force evaluation.

use crate::physics::body::Body;
use crate::physics::forces::ForceModel;
use crate::physics::math::Scalar;

pub mod explicit_euler;
pub mod registry;
pub mod symplectic_euler;
pub mod velocity_verlet;

pub use explicit_euler::ExplicitEuler;
pub use registry::IntegratorRegistry;
pub use symplectic_euler::SymplecticEuler;
pub use velocity_verlet::VelocityVerlet;

/// Base trait for all integrators
pub trait Integrator: Send + Sync {
    /// Clone this integrator into a new box
    fn clone_box(&self) -> Box<dyn Integrator>;

    /// Advance every body by one time step.
    ///
    /// # Arguments
    /// * `bodies` - Bodies to advance; accelerations must match current positions
    /// * `forces` - Force model evaluated once for the new positions
    /// * `dt` - Time step
    fn step(&self, bodies: &mut [Body], forces: &dyn ForceModel, dt: Scalar);

    /// Order of convergence (global error ~ dt^order)
    fn convergence_order(&self) -> usize;

    /// Whether the method preserves phase-space volume
    fn is_symplectic(&self) -> bool;

    /// Canonical name of the integrator
    fn name(&self) -> &'static str;

    /// Alternative names accepted by the registry
    fn aliases(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

impl Clone for Box<dyn Integrator> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl std::fmt::Debug for dyn Integrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Integrator")
            .field("name", &self.name())
            .field("order", &self.convergence_order())
            .finish()
    }
}

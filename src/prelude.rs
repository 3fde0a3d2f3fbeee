//! Orrery prelude module
//!
//! Re-exports the types most code touching the simulation needs.

pub use crate::physics::math::{Scalar, Vector};

// Config
pub use crate::config::{
    DiagnosticsConfig, PhysicsConfig, SimulationConfig, SystemConfig, TrailConfig,
};

// Errors
pub use crate::error::{Result, SimulationError};

// Physics
pub use crate::physics::{
    Body, BodySystem, ForceModel, Integrator, IntegratorRegistry, PairwiseGravity,
    SimulationConstants, VelocityVerlet,
};

// Scenarios and presentation data
pub use crate::appearance::{Appearance, Color};
pub use crate::presets::{BodyDescriptor, Preset};
pub use crate::rng::{RenderingRng, SharedRng};
pub use crate::simulation::Simulation;
pub use crate::trails::{Trail, Trails};

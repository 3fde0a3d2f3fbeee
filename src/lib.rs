//! Orrery library
//!
//! Gravitational n-body simulation in astronomical units: positions in AU,
//! time in years, masses in solar masses, so `G = 4π²`. The headless binary
//! drives the same [`simulation::Simulation`] that a renderer would.

pub mod appearance;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod physics;
pub mod prelude;
pub mod presets;
pub mod rng;
pub mod simulation;
pub mod trails;

// Test utilities are public for integration tests and benchmarks
pub mod test_utils;

pub use config::SimulationConfig;
pub use error::{Result, SimulationError};
pub use simulation::Simulation;

//! Frame-level driver around a [`BodySystem`]
//!
//! A frame is a fixed number of physics sub-steps followed by one trail
//! sample. The simulation carries each body's appearance alongside so a
//! presentation layer can draw positions without knowing about presets.

use crate::appearance::Appearance;
use crate::config::SimulationConfig;
use crate::diagnostics::SimulationDiagnostics;
use crate::error::{Result, SimulationError};
use crate::physics::constants::SimulationConstants;
use crate::physics::integrators::{Integrator, IntegratorRegistry, VelocityVerlet};
use crate::physics::math::Vector;
use crate::physics::system::BodySystem;
use crate::presets::{self, BodyDescriptor};
use crate::trails::Trails;
use tracing::{debug, info};

pub const DEFAULT_SUBSTEPS_PER_FRAME: usize = 5;

#[derive(Debug, Clone)]
pub struct Simulation {
    system: BodySystem,
    integrator: Box<dyn Integrator>,
    substeps_per_frame: usize,
    recenter_positions: bool,
    names: Vec<String>,
    appearances: Vec<Appearance>,
    trails: Option<Trails>,
    diagnostics: Option<SimulationDiagnostics>,
    frame: u64,
}

impl Simulation {
    /// Build the bodies described by `descriptors` and run the setup pass:
    /// one force evaluation followed by barycentric momentum removal.
    pub fn new(descriptors: &[BodyDescriptor], constants: SimulationConstants) -> Result<Self> {
        let bodies = presets::build_bodies(descriptors, &constants)?;
        let system = BodySystem::initialize(bodies, constants)?;

        Ok(Self {
            system,
            integrator: Box::new(VelocityVerlet),
            substeps_per_frame: DEFAULT_SUBSTEPS_PER_FRAME,
            recenter_positions: false,
            names: descriptors.iter().map(|d| d.name.clone()).collect(),
            appearances: descriptors.iter().map(|d| d.appearance).collect(),
            trails: None,
            diagnostics: None,
            frame: 0,
        })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        let constants = config.constants()?;
        let descriptors = config.descriptors()?;
        let integrator = IntegratorRegistry::default().create(&config.physics.integrator)?;

        let mut simulation = Self::new(&descriptors, constants)?
            .with_integrator(integrator)
            .with_substeps(config.physics.substeps_per_frame)?
            .with_recentering(config.physics.recenter_positions)?;

        if config.trails.enabled {
            simulation = simulation.with_trails(config.trails.max_points);
        }
        if config.diagnostics.enabled {
            let diagnostics = SimulationDiagnostics::new(&config.diagnostics);
            simulation = simulation.with_diagnostics(diagnostics);
        }

        info!(
            bodies = simulation.system.len(),
            integrator = simulation.integrator.name(),
            substeps = simulation.substeps_per_frame,
            "Simulation ready"
        );

        Ok(simulation)
    }

    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.integrator = integrator;
        self
    }

    /// A frame must advance time, so zero sub-steps is rejected
    pub fn with_substeps(mut self, substeps_per_frame: usize) -> Result<Self> {
        if substeps_per_frame == 0 {
            return Err(SimulationError::InvalidConstant {
                name: "substeps_per_frame",
                value: 0.0,
            });
        }
        self.substeps_per_frame = substeps_per_frame;
        Ok(self)
    }

    /// Keep the barycenter on the origin. Shifts positions once immediately.
    pub fn with_recentering(mut self, enabled: bool) -> Result<Self> {
        self.recenter_positions = enabled;
        if enabled {
            self.system.recenter_on_barycenter()?;
        }
        Ok(self)
    }

    pub fn with_trails(mut self, capacity: usize) -> Self {
        let mut trails = Trails::new(self.appearances.iter().map(|a| a.color), capacity);
        trails.record(&self.system);
        self.trails = Some(trails);
        self
    }

    pub fn with_diagnostics(mut self, mut diagnostics: SimulationDiagnostics) -> Self {
        diagnostics.record(&self.system);
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Run one frame: `substeps_per_frame` physics steps, then one trail sample
    pub fn advance_frame(&mut self) -> Result<()> {
        self.system.step_n(self.integrator.as_ref(), self.substeps_per_frame);

        if self.recenter_positions {
            self.system.recenter_on_barycenter()?;
        }

        if let Some(trails) = &mut self.trails {
            trails.record(&self.system);
        }

        self.frame += 1;
        if let Some(diagnostics) = &mut self.diagnostics {
            diagnostics.on_frame(self.frame, &self.system);
        }

        debug!(frame = self.frame, time = self.system.time(), "Advanced frame");
        Ok(())
    }

    pub fn advance_frames(&mut self, frames: u64) -> Result<()> {
        for _ in 0..frames {
            self.advance_frame()?;
        }
        Ok(())
    }

    /// Current positions in simulation units (AU), indexed like the bodies
    pub fn positions(&self) -> impl Iterator<Item = (usize, Vector)> + '_ {
        self.system.positions()
    }

    pub fn appearances(&self) -> &[Appearance] {
        &self.appearances
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn trails(&self) -> Option<&Trails> {
        self.trails.as_ref()
    }

    pub fn diagnostics(&self) -> Option<&SimulationDiagnostics> {
        self.diagnostics.as_ref()
    }

    pub fn system(&self) -> &BodySystem {
        &self.system
    }

    pub fn integrator(&self) -> &dyn Integrator {
        self.integrator.as_ref()
    }

    pub fn substeps_per_frame(&self) -> usize {
        self.substeps_per_frame
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

//! Command line interface for the headless runner

use clap::Parser;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::physics::integrators::IntegratorRegistry;
use crate::physics::math::relative_change;
use crate::presets::Preset;
use crate::simulation::Simulation;

/// Version string with the build date stamped in by the build script
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_DATE"), ")");

/// Orrery - gravitational n-body simulation in AU, years and solar masses
#[derive(Parser, Debug, Default)]
#[command(version = VERSION, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, value_name = "COUNT", default_value_t = 1000)]
    pub frames: u64,

    /// Physics steps per frame (overrides config file)
    #[arg(long, value_name = "COUNT")]
    pub substeps: Option<usize>,

    /// Time step in years (overrides config file)
    #[arg(long, value_name = "YEARS")]
    pub time_step: Option<f64>,

    /// Gravitational constant (overrides config file)
    #[arg(short = 'g', long, value_name = "VALUE")]
    pub gravity: Option<f64>,

    /// Integrator name or alias (e.g., velocity_verlet, euler_cromer)
    #[arg(short = 'i', long, value_name = "NAME")]
    pub integrator: Option<String>,

    /// Initial conditions: solar_system, two_body or random
    #[arg(short = 'p', long, value_name = "NAME")]
    pub preset: Option<Preset>,

    /// Random seed for generated systems
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Number of planets for the random preset
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub bodies: Option<usize>,

    /// Disable trail recording
    #[arg(long)]
    pub no_trails: bool,

    /// List available integrators and exit
    #[arg(long)]
    pub list_integrators: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Available integrators and their aliases, one per line
pub fn integrator_listing() -> String {
    let registry = IntegratorRegistry::default();
    let mut listing = String::from("Available integrators:\n");
    for name in registry.list_available() {
        let _ = writeln!(listing, "  - {name}");
    }

    let aliases = registry.list_aliases();
    if !aliases.is_empty() {
        listing.push_str("\nAliases:\n");
        for (alias, target) in aliases {
            let _ = writeln!(listing, "  - {alias} -> {target}");
        }
    }
    listing
}

/// Handles the --list-integrators flag by printing available integrators
pub fn handle_list_integrators() {
    print!("{}", integrator_listing());
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            SimulationConfig::load(path)?
        }
        None => SimulationConfig::load_from_user_config(),
    };

    if let Some(substeps) = args.substeps {
        info!("Overriding substeps per frame to: {substeps}");
        config.physics.substeps_per_frame = substeps;
    }

    if let Some(time_step) = args.time_step {
        info!("Overriding time step to: {time_step}");
        config.physics.time_step = time_step;
    }

    if let Some(gravity) = args.gravity {
        info!("Overriding gravitational constant to: {gravity}");
        config.physics.gravitational_constant = gravity;
    }

    if let Some(integrator) = &args.integrator {
        IntegratorRegistry::default().create(integrator)?;
        info!("Using integrator: {integrator}");
        config.physics.integrator = integrator.clone();
    }

    if let Some(preset) = args.preset {
        info!("Using preset: {preset}");
        config.system.preset = preset;
        config.system.bodies = None;
    }

    if let Some(seed) = args.seed {
        info!("Using random seed: {seed}");
        config.system.seed = Some(seed);
    }

    if let Some(bodies) = args.bodies {
        info!("Overriding random body count to: {bodies}");
        config.system.random_body_count = bodies;
    }

    if args.no_trails {
        config.trails.enabled = false;
    }

    config.validate()?;
    Ok(config)
}

/// Final positions, one row per body, in AU
pub fn positions_table(simulation: &Simulation) -> String {
    let mut table = format!(
        "{:<12} {:>14} {:>14} {:>14} {:>10}\n",
        "body", "x [AU]", "y [AU]", "z [AU]", "r [AU]"
    );
    for ((_, position), name) in simulation.positions().zip(simulation.names()) {
        let _ = writeln!(
            table,
            "{:<12} {:>14.6} {:>14.6} {:>14.6} {:>10.4}",
            name,
            position.x,
            position.y,
            position.z,
            position.length()
        );
    }
    table
}

/// Run the configured simulation for `args.frames` frames and report the result
pub fn run(args: &Args, config: &SimulationConfig) -> Result<String> {
    let mut simulation = Simulation::from_config(config)?;
    let initial_energy = simulation.system().total_energy();

    simulation.advance_frames(args.frames)?;

    let system = simulation.system();
    let drift = relative_change(initial_energy, system.total_energy());

    let mut report = positions_table(&simulation);
    let _ = writeln!(
        report,
        "\nt = {:.4} yr after {} frames ({} steps, {})",
        system.time(),
        simulation.frame(),
        system.step_count(),
        simulation.integrator().name()
    );
    let _ = writeln!(report, "relative energy drift: {drift:.3e}");
    if let Some(diagnostics) = simulation.diagnostics() {
        let _ = writeln!(
            report,
            "max sampled energy drift: {:.3e}",
            diagnostics.max_relative_energy_drift()
        );
    }
    Ok(report)
}

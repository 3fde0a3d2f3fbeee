use clap::Parser;
use orrery::cli::{self, Args};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("orrery={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.list_integrators {
        cli::handle_list_integrators();
        return ExitCode::SUCCESS;
    }

    init_logging(args.verbose);

    let result = cli::load_and_apply_config(&args).and_then(|config| cli::run(&args, &config));
    match result {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

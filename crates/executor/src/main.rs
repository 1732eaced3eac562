pub mod config;
pub mod error;
pub mod report;

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use error::Error;

fn main() -> ExitCode {
    setup_logging();

    let config_path = match parse_args() {
        Ok(path) => path,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = match config::load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        path = %config_path.display(),
        scenarios = config.scenarios.len(),
        "Configuration loaded."
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for scenario in &config.scenarios {
        info!(scenario = %scenario.name, "Running scenario.");

        match report::write_scenario(&mut out, scenario, &config.report) {
            Ok(()) => {}
            Err(Error::GraphError(e)) => {
                warn!(scenario = %scenario.name, "Scenario rejected: {}", e);
            }
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    info!("All scenarios processed.");
    ExitCode::SUCCESS
}

/// Logs go to stderr so stdout carries only the reports. `RUST_LOG` overrides
/// the default `info` filter.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

/// Parse command-line arguments to determine the configuration file.
fn parse_args() -> Result<PathBuf, Error> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None => config::default_config_path(),
        Some("-h") | Some("--help") => {
            eprintln!(
                "Usage: {} [path_to_config.toml]\n  Defaults to crates/executor/Config.toml under the current directory.",
                args[0]
            );
            std::process::exit(0);
        }
        Some(path) => Ok(PathBuf::from(path)),
    }
}

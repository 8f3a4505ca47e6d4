//! Config Emitter CLI
//!
//! Writes the auto-generated configuration file to the path given on the
//! command line.

mod cli;

use std::ffi::OsString;

use clap::Parser;
use colored::Colorize;
use emitter_core::{ConfigEmitter, EmitError, EmittedConfig, OutputTarget, Result};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::Cli;

const DEFAULT_PROGRAM_NAME: &str = "config-emitter";

fn main() {
    if let Err(e) = run(std::env::args_os().collect()) {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: Vec<OsString>) -> Result<()> {
    let program = program_name(&args);

    let args = cli::separate_lone_path(args);

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if cli::is_informational(e.kind()) => e.exit(),
        Err(e) => {
            if !cli::is_argument_count_error(e.kind()) {
                eprint!("{}", e.render());
            }
            return Err(EmitError::usage(program));
        }
    };

    init_tracing(cli.verbose);
    tracing::debug!(?cli, "Parsed arguments");

    let target = OutputTarget::new(cli.output_file);
    ConfigEmitter::new(EmittedConfig::DEFAULT)
        .with_line_ending(cli.line_ending.into())
        .emit(&target)?;

    println!(
        "Configuration file generated: {}",
        target.to_string().bold()
    );
    Ok(())
}

/// The name the binary was invoked as, for the usage line.
fn program_name(args: &[OsString]) -> String {
    args.first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

/// Install the stderr subscriber. `--verbose` forces debug, otherwise
/// `RUST_LOG` applies with a `warn` default.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
}

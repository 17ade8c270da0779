//! # spacereg CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spacereg_cli::assess::{run_assess, AssessArgs};
use spacereg_cli::data::{run_data, DataArgs};
use spacereg_cli::guidelines::{run_guidelines, GuidelinesArgs};
use spacereg_cli::GlobalOptions;

/// Space regulatory compliance assessments.
///
/// Compares national space-law regimes for a mission, scores compliance
/// against international guidelines, and previews how the EU Space Act
/// will change the picture.
#[derive(Parser, Debug)]
#[command(name = "spacereg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the engine configuration file (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory of reference tables replacing the bundled corpus.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assess the selected jurisdictions for a questionnaire.
    Assess(AssessArgs),

    /// Score a mission profile against the international guidelines.
    Guidelines(GuidelinesArgs),

    /// Validate or list the reference data.
    Data(DataArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let options = GlobalOptions {
        config: cli.config,
        data_dir: cli.data_dir,
    };
    tracing::debug!(?options, "spacereg CLI starting");

    let result = match cli.command {
        Commands::Assess(args) => run_assess(&args, &options),
        Commands::Guidelines(args) => run_guidelines(&args, &options),
        Commands::Data(args) => run_data(&args, &options),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

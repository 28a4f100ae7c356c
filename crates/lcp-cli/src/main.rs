//! # lcp CLI entry point
//!
//! Parses command-line arguments, loads operator config, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lcp_cli::config::LcpConfig;
use lcp_cli::validate::{run_validate, ValidateArgs};

/// Localization content pack toolchain.
///
/// Validates per-market YAML content packs before they ship.
#[derive(Parser, Debug)]
#[command(name = "lcp", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: ./lcp.yaml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate content packs and report violations per pack.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("lcp CLI starting");

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match LcpConfig::load(cli.config.as_deref(), &cwd) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    tracing::debug!(
        packs_dir = %config.packs_dir.display(),
        max_sla_days = config.policy.max_sla_days,
        "effective configuration"
    );

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

//! # Validate Subcommand
//!
//! Discovers market packs, runs loader and validator on each, prints the
//! report, and turns the batch verdict into an exit code.
//!
//! One pack's load failure never stops the others from being checked.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use lcp_core::ValidationPolicy;
use lcp_pack::{BatchReport, PackReport};

use crate::config::LcpConfig;

/// Arguments for the `lcp validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory to scan for `*.yaml` packs (overrides the config file).
    #[arg(long, value_name = "DIR")]
    pub packs_dir: Option<PathBuf>,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Reference date for staleness warnings (YYYY-MM-DD). Defaults to
    /// today in UTC.
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Validate only these pack files instead of scanning the packs
    /// directory.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every pack is clean, 1 when any pack fails or
/// no packs were found.
pub fn run_validate(args: &ValidateArgs, config: &LcpConfig) -> Result<u8> {
    let packs_dir = args.packs_dir.as_deref().unwrap_or(&config.packs_dir);

    let paths = if args.paths.is_empty() {
        discover_packs(packs_dir)?
    } else {
        args.paths.clone()
    };

    if paths.is_empty() {
        println!("No packs found in {}/*.yaml", packs_dir.display());
        return Ok(1);
    }

    let as_of = args
        .as_of
        .unwrap_or_else(|| chrono::Utc::now().date_naive());
    let batch = validate_paths(&paths, &config.policy, as_of);

    tracing::info!(
        total = batch.total(),
        passed = batch.passed(),
        failed = batch.failed(),
        "validation run complete"
    );

    if args.json {
        println!("{}", batch.to_json().context("failed to serialize report")?);
    } else {
        print!("{}", batch.render_text());
    }

    Ok(if batch.is_success() { 0 } else { 1 })
}

/// Validate each path in order and collect the outcomes.
pub fn validate_paths(paths: &[PathBuf], policy: &ValidationPolicy, as_of: NaiveDate) -> BatchReport {
    paths
        .iter()
        .map(|path| PackReport::run(path, policy, Some(as_of)))
        .collect()
}

/// List `*.yaml` files directly under `dir`, sorted.
///
/// A missing directory yields no packs rather than an error, so the caller
/// reports "no packs found". Any other read failure is an error.
pub fn discover_packs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "packs directory not found");
        return Ok(Vec::new());
    }
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read packs directory: {}", dir.display()))?;

    let mut packs = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "yaml") {
            packs.push(path);
        }
    }
    packs.sort();
    tracing::debug!(dir = %dir.display(), count = packs.len(), "discovered packs");
    Ok(packs)
}

//! Convert command implementation.
//!
//! The convert command:
//! 1. Loads the line_profiler results file
//! 2. Maps it onto the output document
//! 3. Writes the JSON file

use crate::output::write_document;
use crate::parser::{load_stats, to_document};
use crate::summary::{summarize, ProfileSummary};
use crate::utils::error::LoadError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the pickled `LineStats` file
    pub input: PathBuf,

    /// Path of the JSON document to write
    pub output: PathBuf,
}

/// Outcome of a conversion that did not fail outright
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertStatus {
    /// Document written
    Written(ProfileSummary),

    /// Input uses a pickle protocol the loader refuses; nothing was written
    UnsupportedProtocol(u8),
}

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// `ConvertStatus::UnsupportedProtocol` when the input cannot be read for
/// that reason, so the caller can pick an exit code; every other failure is
/// an error.
///
/// # Errors
/// * Input file missing or unreadable
/// * Input is not a line_profiler results pickle
/// * Output file cannot be written
pub fn execute_convert(args: &ConvertArgs) -> Result<ConvertStatus> {
    let start_time = Instant::now();

    info!("Converting {}", args.input.display());

    // Step 1: Load profiling results
    let stats = match load_stats(&args.input) {
        Ok(stats) => stats,
        Err(LoadError::UnsupportedProtocol(version)) => {
            debug!("Refusing {}: protocol {}", args.input.display(), version);
            return Ok(ConvertStatus::UnsupportedProtocol(version));
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!("Failed to load profile {}", args.input.display())
            })
        }
    };

    // Step 2: Build document
    let document = to_document(&stats);
    let summary = summarize(&document);
    info!("{}", summary.summary());

    // Step 3: Write JSON
    write_document(&document, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(
        "Conversion completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(ConvertStatus::Written(summary))
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    Ok(())
}

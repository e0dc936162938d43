//! kernprof-json CLI
//!
//! Reads a line_profiler results file and writes its timings as JSON.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::warn;
use std::path::PathBuf;

use kernprof_json::commands::{execute_convert, validate_args, ConvertArgs, ConvertStatus};
use kernprof_json::utils::config::UNSUPPORTED_PROTOCOL_EXIT_CODE;

/// Convert a line_profiler results file to JSON
#[derive(Parser, Debug)]
#[command(name = "kernprof-json")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Results file written by kernprof / LineProfiler.dump_stats
    profile_input_file: PathBuf,

    /// Path of the JSON document to write
    profile_output_json: PathBuf,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = ConvertArgs {
        input: cli.profile_input_file,
        output: cli.profile_output_json,
    };

    validate_args(&args)?;

    match execute_convert(&args)? {
        ConvertStatus::Written(_) => Ok(()),
        ConvertStatus::UnsupportedProtocol(version) => {
            warn!(
                "{} uses unsupported pickle protocol {}",
                args.input.display(),
                version
            );
            std::process::exit(UNSUPPORTED_PROTOCOL_EXIT_CODE);
        }
    }
}

//! Binary entry point for homeroom.
//!
//! This binary provides the CLI interface for the schoolwork
//! reconciliation pipeline.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use homeroom::cli::{ScanOptions, run_parse, run_scan};
use homeroom::config::HomeroomConfig;
use homeroom::observability::{self, LoggingConfig};
use std::path::PathBuf;
use std::process::ExitCode;

/// Homeroom - reconciles scanned schoolwork with course-management
/// records.
#[derive(Parser)]
#[command(name = "homeroom")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML configuration file.
    #[arg(short, long, global = true, env = "HOMEROOM_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Show what the field parser extracts from a text file.
    Parse {
        /// Text file with OCR output to parse.
        file: PathBuf,

        /// Emit JSON instead of a report.
        #[arg(long)]
        json: bool,
    },

    /// Reconcile scanned documents against a catalog fixture.
    Scan {
        /// Documents to process. `.txt` files are taken as extracted
        /// text; other files need a `<name>.txt` sidecar.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Catalog fixture JSON with assignments and roster.
        #[arg(long)]
        catalog: PathBuf,

        /// Student ID; detected from the document when omitted.
        #[arg(long)]
        student: Option<String>,

        /// Emit JSON instead of a report.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = observability::init(&LoggingConfig::from_env(cli.verbose)) {
        eprintln!("warning: logging init failed: {e}");
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        },
    };

    let output = match cli.command {
        Commands::Parse { file, json } => run_parse(&file, &config, json),
        Commands::Scan {
            files,
            catalog,
            student,
            json,
        } => {
            run_scan(
                ScanOptions {
                    files,
                    catalog,
                    student,
                    json,
                },
                &config,
            )
            .await
        },
    };

    match output {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn load_config(path: Option<&std::path::Path>) -> homeroom::Result<HomeroomConfig> {
    path.map_or_else(|| Ok(HomeroomConfig::default()), HomeroomConfig::load)
}

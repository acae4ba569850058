// SPDX-License-Identifier: MIT
//
// motif: preview and check tool for the procedural visual library.
//
// Wires the three crates together for a terminal:
//
//   motif-seed     → seeded streams, intensity table
//   motif-variants → the eighteen generators and the name registry
//   motif-motion   → presentations, gallery, configuration
//
// Subcommands:
//
//   list   → every registered variant, optionally filtered
//   show   → one visual's presentation as JSON or a short summary
//   check  → sweep every variant for determinism, bounds, and sensitivity
//
// Logging goes to stderr through tracing-subscriber. RUST_LOG wins over
// --verbose when both are set.

// Sweep statistics divide usize counts.
#![allow(clippy::cast_precision_loss)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use motif_seed::IntensityLevel;
use motif_variants::Family;
use tracing_subscriber::EnvFilter;

mod commands;

/// Deterministic procedural motion graphics, previewed in the terminal.
#[derive(Parser)]
#[command(name = "motif")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered variants
    List {
        /// Only show one family
        #[arg(long, value_enum)]
        family: Option<FamilyArg>,

        /// Regex matched against variant names
        #[arg(long)]
        filter: Option<String>,
    },

    /// Generate one visual and print its presentation
    Show {
        /// Variant name, e.g. contentFlow
        variant: String,

        /// Seed string (usually a page or section identifier)
        #[arg(short, long, default_value = "")]
        seed: String,

        /// subtle, medium, or bold (defaults to the configured intensity)
        #[arg(short, long)]
        intensity: Option<IntensityLevel>,

        /// Present the static pose instead of the animation
        #[arg(long)]
        reduced_motion: bool,

        #[arg(short, long, value_enum, default_value = "summary")]
        format: OutputFormat,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Sweep every variant over many seeds and report violations
    Check {
        /// Seeds per variant
        #[arg(long, default_value = "200")]
        seeds: usize,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FamilyArg {
    Ambient,
    Tile,
}

impl From<FamilyArg> for Family {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Ambient => Self::Ambient,
            FamilyArg::Tile => Self::Tile,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed presentation
    Json,
    /// A few human-readable lines
    Summary,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match cli.command {
        Commands::List { family, filter } => {
            commands::list::run(family.map(Family::from), filter.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Show { variant, seed, intensity, reduced_motion, format, config } => {
            let opts = commands::show::ShowOptions {
                variant: &variant,
                seed: &seed,
                intensity,
                reduced_motion,
                json: format == OutputFormat::Json,
                config: config.as_deref(),
            };
            commands::show::run(&opts)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { seeds } => {
            let report = commands::check::run(seeds);
            Ok(if report.passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

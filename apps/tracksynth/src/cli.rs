//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Generate a synthetic fleet of quadratic-Bezier trajectories over a square
/// world split into four sections.
#[derive(Parser, Debug)]
#[command(name = "tracksynth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML file with `FleetConfig` fields; missing fields keep their defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of objects (overrides the config file)
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    /// Master RNG seed (overrides the config file)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Worker threads for generation (overrides the config file)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Output directory, created if missing
    #[arg(short, long, default_value = "output")]
    pub out: PathBuf,

    /// Output backend
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Enable debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Sqlite,
    Parquet,
}

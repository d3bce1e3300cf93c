//! tracksynth: generate a synthetic fleet of trajectories and persist it.
//!
//! ```text
//! tracksynth --count 50 --seed 42 --out ./output --format sqlite
//! ```
//!
//! Every object gets a random start point, a waypoint and a destination at
//! configured distances, a speed, and a start time inside the simulation
//! window.  Its path is the quadratic Bezier through those three points,
//! sampled every 150 ms, together with the timestamps at which it entered
//! and left each of the four world sections.

mod cli;
mod config;


use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ts_fleet::{Fleet, FleetBuilder, FleetSummary};
use ts_output::{CsvWriter, FleetOutputObserver, OutputWriter};

use cli::{Cli, Format};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = config::resolve(&cli)?;
    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating output directory {}", cli.out.display()))?;

    let fleet = FleetBuilder::new(config).build()?;

    let started = Instant::now();
    let summary = write_fleet(&fleet, cli.format, &cli.out)?;
    let elapsed = started.elapsed();

    info!(
        objects = summary.objects,
        states = summary.states,
        crossings = summary.crossings,
        elapsed_ms = elapsed.as_millis() as u64,
        out = %cli.out.display(),
        format = ?cli.format,
        "fleet written"
    );
    Ok(())
}

/// Generate `fleet` and stream it into the backend selected by `format`.
fn write_fleet(fleet: &Fleet, format: Format, out: &Path) -> Result<FleetSummary> {
    match format {
        Format::Csv => run_with(fleet, CsvWriter::new(out)?),
        Format::Sqlite => {
            #[cfg(feature = "sqlite")]
            {
                run_with(fleet, ts_output::SqliteWriter::new(out)?)
            }
            #[cfg(not(feature = "sqlite"))]
            {
                anyhow::bail!("tracksynth was built without the `sqlite` feature")
            }
        }
        Format::Parquet => {
            #[cfg(feature = "parquet")]
            {
                run_with(fleet, ts_output::ParquetWriter::new(out)?)
            }
            #[cfg(not(feature = "parquet"))]
            {
                anyhow::bail!("tracksynth was built without the `parquet` feature")
            }
        }
    }
}

fn run_with<W: OutputWriter>(fleet: &Fleet, writer: W) -> Result<FleetSummary> {
    let mut observer = FleetOutputObserver::new(writer);
    let summary = fleet.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing output");
    }
    Ok(summary)
}

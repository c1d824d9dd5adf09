//! tower — compares two elevator travel speeds over one arrival manifest.
//!
//! Loads `Elevators.csv` (or `--manifest`), runs the simulation once with
//! the baseline per-floor travel time and once with the proposed one, then
//! prints both reports and the reduction the faster elevators would buy.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use lift_building::NearestTargetDispatch;
use lift_core::{
    BUILDING_FLOORS, ELEVATOR_COUNT, MAX_CAPACITY, SIMULATION_END_TICK, STOP_DURATION_TICKS,
    SimConfig,
};
use lift_manifest::{Manifest, load_manifest_csv};
use lift_output::{CsvWriter, OutputWriter, SimOutputObserver};
use lift_sim::{NoopObserver, SimBuilder, SimReport};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    /// Requires the `sqlite` feature.
    Sqlite,
}

#[derive(Debug, Parser)]
#[command(name = "tower", about = "Elevator dispatch simulation: baseline vs. proposed travel speed")]
struct Args {
    /// Arrival manifest: `requestedTime,startFloor,endFloor` with a header row
    #[arg(long, default_value = "Elevators.csv")]
    manifest: PathBuf,

    #[arg(long, default_value_t = BUILDING_FLOORS)]
    floors: u32,

    #[arg(long, default_value_t = ELEVATOR_COUNT)]
    elevators: u16,

    /// Passengers per elevator
    #[arg(long, default_value_t = MAX_CAPACITY)]
    capacity: usize,

    /// Door dwell before an elevator can board or leave
    #[arg(long, default_value_t = STOP_DURATION_TICKS)]
    stop_ticks: u32,

    /// Hard cap on simulated ticks per run
    #[arg(long, default_value_t = SIMULATION_END_TICK)]
    max_ticks: u64,

    /// Ticks per floor for the current elevators
    #[arg(long, default_value_t = 10)]
    baseline_travel_ticks: u32,

    /// Ticks per floor for the proposed elevators
    #[arg(long, default_value_t = 5)]
    proposed_travel_ticks: u32,

    /// Seconds represented by one tick
    #[arg(long, default_value_t = 1)]
    tick_secs: u32,

    /// Elevator snapshot cadence in ticks (0 disables snapshots)
    #[arg(long, default_value_t = 1)]
    snapshot_interval: u64,

    /// Directory for per-run output; `baseline/` and `proposed/` are created inside
    #[arg(long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Also write log lines to this file (no ANSI colours)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self, floor_travel_ticks: u32) -> SimConfig {
        SimConfig {
            floor_count:           self.floors,
            elevator_count:        self.elevators,
            capacity:              self.capacity,
            stop_duration_ticks:   self.stop_ticks,
            floor_travel_ticks,
            max_ticks:             self.max_ticks,
            tick_duration_secs:    self.tick_secs,
            output_interval_ticks: self.snapshot_interval,
        }
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();
    Ok(())
}

// ── Runs ──────────────────────────────────────────────────────────────────────

fn run_scenario(label: &str, config: SimConfig, manifest: &Manifest, args: &Args) -> Result<SimReport> {
    let mut sim = SimBuilder::new(config.clone(), NearestTargetDispatch)
        .arrivals(manifest.records.clone())
        .build()
        .with_context(|| format!("building {label} simulation"))?;

    let Some(root) = &args.output else {
        return Ok(sim.run(&mut NoopObserver));
    };

    let dir = root.join(label);
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    info!(run = label, dir = %dir.display(), format = ?args.format, "writing output");

    match args.format {
        OutputFormat::Csv => run_with_writer(&mut sim, CsvWriter::new(&dir)?, &config),
        #[cfg(feature = "sqlite")]
        OutputFormat::Sqlite => {
            run_with_writer(&mut sim, lift_output::SqliteWriter::new(&dir)?, &config)
        }
        #[cfg(not(feature = "sqlite"))]
        OutputFormat::Sqlite => anyhow::bail!("tower was built without the `sqlite` feature"),
    }
}

fn run_with_writer<W: OutputWriter>(
    sim:    &mut lift_sim::Sim<NearestTargetDispatch>,
    writer: W,
    config: &SimConfig,
) -> Result<SimReport> {
    let mut obs = SimOutputObserver::new(writer, config);
    let report = sim.run(&mut obs);
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing simulation output");
    }
    Ok(report)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_deref())?;

    let manifest = load_manifest_csv(&args.manifest)?;
    info!(
        path = %args.manifest.display(),
        passengers = manifest.len(),
        skipped = manifest.skipped,
        "manifest loaded"
    );

    let t0 = Instant::now();
    let baseline = run_scenario(
        "baseline",
        args.config(args.baseline_travel_ticks),
        &manifest,
        &args,
    )?;
    let proposed = run_scenario(
        "proposed",
        args.config(args.proposed_travel_ticks),
        &manifest,
        &args,
    )?;
    let elapsed = t0.elapsed();

    println!("=== Baseline ({} ticks per floor) ===", args.baseline_travel_ticks);
    println!("{baseline}");
    println!();
    println!("=== Proposed ({} ticks per floor) ===", args.proposed_travel_ticks);
    println!("{proposed}");
    println!();
    println!("=== Reduction ===");
    println!("{}", proposed.reduction_vs(&baseline));
    println!();
    println!("Both runs completed in {:.3} s", elapsed.as_secs_f64());

    Ok(())
}

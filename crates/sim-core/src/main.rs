//! Spatial Belief Dynamics Simulation
//!
//! Headless driver: builds a population, steps it, and optionally writes
//! periodic snapshots as JSONL for plotting and analysis tools.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sim_core::{Config, SnapshotSchedule, SnapshotWriter, Simulation, TickSummary};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "belief_sim")]
#[command(about = "Spatial belief dynamics simulation")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Number of agents
    #[arg(long, default_value_t = 100)]
    population: usize,

    /// Tuning file (defaults to tuning.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Interval between snapshots (in ticks); 0 writes only the initial and final states
    #[arg(long, default_value_t = 100)]
    snapshot_interval: u64,

    /// JSONL file to receive snapshots
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    tracing::info!(
        seed = args.seed,
        ticks = args.ticks,
        population = args.population,
        "Starting simulation"
    );

    let mut sim = Simulation::new(config, args.population, args.seed)?;
    let mut writer = match &args.output {
        Some(path) => SnapshotWriter::new(path)?,
        None => SnapshotWriter::null(),
    };
    let mut schedule = SnapshotSchedule::new(args.snapshot_interval);

    // Initial state
    writer.write(&sim.snapshot())?;
    schedule.mark_snapshot(0);

    let mut totals = TickSummary::default();
    for _ in 0..args.ticks {
        let summary = sim.step();
        totals.absorb(&summary);

        if schedule.should_snapshot(summary.tick) {
            writer.write(&sim.snapshot())?;
            schedule.mark_snapshot(summary.tick);
        }

        if summary.tick % 100 == 0 {
            tracing::info!(
                tick = summary.tick,
                interactions = summary.interactions,
                isolated = summary.isolated_agents,
                "Progress"
            );
        }
    }

    // Final state, unless the last tick already produced it
    if schedule.last_snapshot_tick() != Some(sim.tick()) {
        writer.write(&sim.snapshot())?;
        schedule.mark_snapshot(sim.tick());
    }
    writer.flush()?;

    tracing::info!(
        ticks = sim.tick(),
        interactions = totals.interactions,
        velocity_changes = totals.velocity_changes,
        snapshots = writer.snapshot_count(),
        "Simulation complete"
    );
    Ok(())
}

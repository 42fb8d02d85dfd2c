//! three-ants — one-shot learning through a shared pheromone trail.
//!
//! A Scout wanders until it stops at food, walks straight home, and leaves
//! a nest → food trail in shared memory.  A Learner replays that trail on its
//! first try.  A Lost ant whose sensor has failed cannot read the trail and
//! has to search for itself.  Trajectories are exported for an external
//! renderer to plot and animate.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ap_core::{AgentRole, SimConfig};
use ap_output::playback::{DEFAULT_FPS, DEFAULT_PAD};
use ap_output::{Bounds, CsvWriter, SimOutputObserver, Timeline};
use ap_sim::{AgentSpec, Behavior, LogObserver, RunOutcome, Sim, SimBuilder};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "three-ants")]
#[command(version, about = "Scout, Learner, and Lost ant: one-shot learning via a shared trail", long_about = None)]
struct Cli {
    /// Random-walk steps per exploration
    #[arg(long, default_value_t = SimConfig::DEFAULT_STEPS)]
    steps: usize,

    /// Length of each random-walk step
    #[arg(long, default_value_t = SimConfig::DEFAULT_STEP_SIZE)]
    step_size: f64,

    /// Points per homing vector
    #[arg(long, default_value_t = SimConfig::DEFAULT_HOMING_SAMPLES)]
    samples: usize,

    /// Seed for a reproducible run (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Let the Lost ant read memory normally
    #[arg(long)]
    no_sensor_fault: bool,

    /// The Scout keeps its trail to itself
    #[arg(long)]
    skip_publish: bool,

    /// Output directory
    #[arg(short, long, default_value = "output/three-ants")]
    output: PathBuf,

    /// Write output.db instead of CSV files
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    sqlite: bool,
}

impl Cli {
    fn config(&self) -> SimConfig {
        SimConfig {
            steps:          self.steps,
            step_size:      self.step_size,
            homing_samples: self.samples,
            seed:           self.seed,
        }
    }

    fn roster(&self) -> Vec<AgentSpec> {
        vec![
            AgentSpec::new(AgentRole::Scout, Behavior::Explore { publish: !self.skip_publish }),
            AgentSpec::learner(),
            AgentSpec::lost(!self.no_sensor_fault),
        ]
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // 1. Build sim.
    let config = cli.config();
    let mut sim = SimBuilder::new(config.clone()).roster(cli.roster()).build()?;
    info!("seed {} (pass --seed {} to replay)", sim.seed(), sim.seed());

    // 2. Run with output.
    std::fs::create_dir_all(&cli.output)?;
    let t0 = Instant::now();
    let outcome = run_with_output(&cli, &config, &mut sim)?;
    let elapsed = t0.elapsed();

    // 3. Playback summary for the renderer.
    let timeline = Timeline::new(&outcome.agents);
    let bounds = Bounds::enclosing(&outcome, DEFAULT_PAD);
    info!(
        "animation: {} frames ({:.1} s at {} fps), extent x [{:.2}, {:.2}] y [{:.2}, {:.2}]",
        timeline.total_frames(),
        timeline.duration_secs(DEFAULT_FPS),
        DEFAULT_FPS,
        bounds.min_x,
        bounds.max_x,
        bounds.min_y,
        bounds.max_y,
    );
    info!("simulation complete in {:.3} ms; output in {}", elapsed.as_secs_f64() * 1e3, cli.output.display());

    // 4. Per-agent table.
    println!();
    println!("{:<10} {:<18} {:>7} {:>8}", "Agent", "Mode", "Points", "Explore");
    println!("{}", "-".repeat(46));
    for agent in &outcome.agents {
        println!(
            "{:<10} {:<18} {:>7} {:>8}",
            agent.role.as_str(),
            agent.mode.as_str(),
            agent.path.len(),
            agent.exploration_len,
        );
    }

    Ok(())
}

fn run_with_output(cli: &Cli, config: &SimConfig, sim: &mut Sim) -> Result<RunOutcome> {
    #[cfg(feature = "sqlite")]
    if cli.sqlite {
        let writer = ap_output::SqliteWriter::new(&cli.output)?;
        return drive(SimOutputObserver::new(writer, config), sim);
    }

    let writer = CsvWriter::new(&cli.output)?;
    drive(SimOutputObserver::new(writer, config), sim)
}

fn drive<W: ap_output::OutputWriter>(output: SimOutputObserver<W>, sim: &mut Sim) -> Result<RunOutcome> {
    let mut observers = (LogObserver, output);
    let outcome = sim.run(&mut observers);
    if let Some(e) = observers.1.take_error() {
        return Err(e.into());
    }
    Ok(outcome)
}

use std::cmp;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use monopoly_odds::{run_simulation, Histogram};

/// Names of the 40 board squares, one per line, in board order.
const BOARD_SPACES: &str = include_str!("../data/board-spaces.txt");

#[derive(Debug, Parser)]
#[command(name = "monopoly-odds", version)]
#[command(about = "Monte Carlo estimation of the landing odds for every Monopoly square")]
struct Args {
    /// The number of turns to simulate
    #[arg(long, default_value_t = 100)]
    turns: u64,

    /// When running in parallel, the maximum number of CPU cores to use
    #[arg(long)]
    max_cpu_cores: Option<usize>,

    /// Don't run the simulation in parallel
    #[arg(long)]
    no_parallel: bool,

    /// Seed for the random number generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory to write the result files into
    #[arg(long, default_value = "results")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let worker_count = worker_count(&args);
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        "simulating {} turns on up to {} workers (seed {})",
        args.turns, worker_count, seed
    );

    let start = Instant::now();
    let results = run_simulation(args.turns, worker_count, seed)?;
    let elapsed = start.elapsed();

    println!("Complete, {} moves made in {:.2?}", results.total(), elapsed);

    save_results(&results, &args.output)
}

/// How many games to run at once: every available core unless the
/// flags say otherwise.
fn worker_count(args: &Args) -> usize {
    if args.no_parallel {
        return 1;
    }

    let available = thread::available_parallelism().map_or(1, |cores| cores.get());
    match args.max_cpu_cores {
        Some(max_cores) => cmp::min(cmp::max(max_cores, 1), available),
        None => available,
    }
}

/// Write the percentage breakdown per square to board-probabilities.txt
/// and board-probabilities.csv, in the order of the board-spaces list.
fn save_results(results: &Histogram, output_dir: &Path) -> Result<()> {
    let total = results.total();

    let mut txt = String::new();
    let mut csv = String::new();

    for (name, &count) in BOARD_SPACES.lines().zip(results.counts().iter()) {
        let percentage = if total == 0 {
            0.
        } else {
            count as f64 / total as f64 * 100.
        };
        txt += &format!("{:<21} - {:.3}%\n", name, percentage);
        csv += &format!("{},{:.3}%\n", name, percentage);
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("couldn't create {}", output_dir.display()))?;

    let txt_path = output_dir.join("board-probabilities.txt");
    fs::write(&txt_path, txt).with_context(|| format!("couldn't write {}", txt_path.display()))?;

    let csv_path = output_dir.join("board-probabilities.csv");
    fs::write(&csv_path, csv).with_context(|| format!("couldn't write {}", csv_path.display()))?;

    info!("results written to {}", output_dir.display());
    Ok(())
}

mod aggregate;
mod partition;

pub use aggregate::aggregate;
pub use partition::{partition, MIN_TURNS_PER_GAME};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::histogram::Histogram;

#[derive(Debug, Error, PartialEq, Eq)]
/// Ways a simulation run can fail. The turn loop itself has no error
/// conditions; everything here is caught at the boundaries around it.
pub enum SimulationError {
    /// The work partitioner was asked to split across zero workers.
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,
    /// The run was cancelled before every game finished.
    #[error("simulation cancelled before completion")]
    Cancelled,
}

#[derive(Clone, Debug, Default)]
/// Cooperative cancellation flag shared between a caller and the
/// simulation workers. Workers poll it between turns, so a cancelled
/// run stops promptly without ever producing a corrupt result.
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Ask all outstanding work to stop.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether a stop has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Run the full simulation: split `total_turns` across up to
/// `worker_count` games, play the games in parallel and merge their
/// histograms into one.
pub fn run_simulation(
    total_turns: u64,
    worker_count: usize,
    seed: u64,
) -> Result<Histogram, SimulationError> {
    run_simulation_with_cancel(total_turns, worker_count, seed, &CancelToken::new())
}

/// `run_simulation` with an externally owned cancellation token.
pub fn run_simulation_with_cancel(
    total_turns: u64,
    worker_count: usize,
    seed: u64,
    cancel: &CancelToken,
) -> Result<Histogram, SimulationError> {
    let turns_per_game = partition(total_turns, worker_count)?;
    aggregate(&turns_per_game, seed, cancel)
}

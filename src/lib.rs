//! Monte Carlo estimation of how often a Monopoly token lands on each
//! board square.
//!
//! The simulation walks a single token around the board for a given
//! number of turns, honouring the two-dice roll distribution, the
//! triple-doubles speeding rule, the 'Go to Jail' square and the
//! movement effects of the Chance and Community Chest decks. Large
//! turn counts are split across workers, each worker plays one
//! independent game, and the per-game landing histograms are summed
//! into the final result.
//!
//! The public surface is [`run_simulation`] (plus its cancellable
//! variant) and the [`Histogram`] it returns: 41 counts, one per board
//! square and one for jail entries. Mapping slot indices to square
//! names is the caller's job.

pub mod game;
pub mod histogram;
pub mod sim;

pub use game::GameSession;
pub use histogram::Histogram;
pub use sim::{
    partition, run_simulation, run_simulation_with_cancel, CancelToken, SimulationError,
    MIN_TURNS_PER_GAME,
};
